use anyhow::{Context, bail};
use chrono::NaiveDate;
use serde_json::json;
use sigi_config::SigiConfig;
use sigi_core::entities::NuevoEntregable;
use sigi_core::enums::{EntregableEstado, Rol, TipoEntregable};
use sigi_db::service::SigiService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntregableCommands;
use crate::output;

/// Handle `sigi entregable`.
///
/// # Errors
///
/// Returns an error for invalid tipos/estados, conflicts, missing rows,
/// unauthorized roles, or persistence failures.
pub async fn handle(
    action: &EntregableCommands,
    svc: &SigiService,
    flags: &GlobalFlags,
    config: &SigiConfig,
) -> anyhow::Result<()> {
    match action {
        EntregableCommands::Create {
            titulo,
            descripcion,
            tipo,
            semillero,
            fecha,
        } => {
            let tipo: TipoEntregable = tipo.parse()?;
            let fecha_entrega = fecha
                .as_deref()
                .map(|f| NaiveDate::parse_from_str(f, "%Y-%m-%d"))
                .transpose()
                .context("la fecha debe tener formato YYYY-MM-DD")?;

            let entregable = svc
                .crear_entregable(&NuevoEntregable {
                    titulo: titulo.clone(),
                    descripcion: descripcion.clone(),
                    tipo,
                    semillero_id: *semillero,
                    fecha_entrega,
                })
                .await?;
            output::output(&entregable, flags.format)
        }
        EntregableCommands::Get { semillero } => {
            let Some(entregable) = svc.obtener_entregable_por_semillero(*semillero).await? else {
                bail!("el semillero {semillero} no tiene entregable asignado");
            };
            output::output(&entregable, flags.format)
        }
        EntregableCommands::List => {
            let entregables = svc.obtener_entregables().await?;
            output::output(&entregables, flags.format)
        }
        EntregableCommands::Estado { id, estado } => {
            let nuevo_estado: EntregableEstado = estado.parse()?;
            svc.cambiar_estado_entregable(*id, nuevo_estado).await?;
            output::output(&json!({"id": id, "estado": nuevo_estado}), flags.format)
        }
        EntregableCommands::Revisar {
            id,
            aprobar,
            rechazar,
            rol,
        } => {
            if !aprobar && !rechazar {
                bail!("indique --aprobar o --rechazar");
            }
            let rol = resolve_rol(rol.as_deref(), config)?;
            let estado = svc.aprobar_denegar_entregable(*id, *aprobar, rol).await?;
            output::output(&json!({"id": id, "estado": estado}), flags.format)
        }
    }
}

/// Resolve the operator rol: explicit `--rol` wins, then the configured
/// default. No ambient fallback — review always names its capability.
fn resolve_rol(explicit: Option<&str>, config: &SigiConfig) -> anyhow::Result<Rol> {
    if let Some(rol) = explicit {
        return Ok(rol.parse()?);
    }
    if !config.general.rol.is_empty() {
        return Ok(config.general.rol.parse()?);
    }
    bail!("indique --rol (estudiante o tutor) o configure general.rol");
}

#[cfg(test)]
mod tests {
    use sigi_config::SigiConfig;
    use sigi_core::enums::Rol;

    use super::resolve_rol;

    #[test]
    fn explicit_rol_wins_over_config() {
        let mut config = SigiConfig::default();
        config.general.rol = "estudiante".to_string();
        let rol = resolve_rol(Some("tutor"), &config).unwrap();
        assert_eq!(rol, Rol::Tutor);
    }

    #[test]
    fn config_rol_is_fallback() {
        let mut config = SigiConfig::default();
        config.general.rol = "tutor".to_string();
        assert_eq!(resolve_rol(None, &config).unwrap(), Rol::Tutor);
    }

    #[test]
    fn missing_rol_is_an_error() {
        let config = SigiConfig::default();
        assert!(resolve_rol(None, &config).is_err());
    }

    #[test]
    fn bogus_rol_is_rejected() {
        let config = SigiConfig::default();
        assert!(resolve_rol(Some("decano"), &config).is_err());
    }
}
