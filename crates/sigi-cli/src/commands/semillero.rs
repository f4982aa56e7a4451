use anyhow::bail;
use serde_json::json;
use sigi_core::entities::{NuevoInvestigador, NuevoSemillero};
use sigi_core::enums::SemilleroStatus;
use sigi_db::service::SigiService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SemilleroCommands;
use crate::output;

/// Handle `sigi semillero`.
///
/// # Errors
///
/// Returns an error for validation violations, missing rows, or
/// persistence failures.
pub async fn handle(
    action: &SemilleroCommands,
    svc: &SigiService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SemilleroCommands::Create {
            nombre,
            objetivo,
            objetivos_especificos,
            grupo,
            estudiantes,
            tutores,
        } => {
            let nuevo = NuevoSemillero {
                nombre: nombre.clone(),
                objetivo_principal: objetivo.clone(),
                objetivos_especificos: objetivos_especificos.clone(),
                grupo_id: Some(*grupo),
                estudiantes: estudiantes
                    .iter()
                    .map(NuevoInvestigador::estudiante)
                    .collect(),
                tutores: tutores.iter().map(NuevoInvestigador::tutor).collect(),
            };

            match svc.crear_semillero(&nuevo).await {
                Ok(id) => output::output(
                    &json!({"id": id, "status": SemilleroStatus::Pendiente}),
                    flags.format,
                ),
                Err(e) if !e.violaciones().is_empty() => {
                    for violacion in e.violaciones() {
                        eprintln!("  - {violacion}");
                    }
                    bail!("el semillero no es válido");
                }
                Err(e) => Err(e.into()),
            }
        }
        SemilleroCommands::List => {
            let semilleros = svc.obtener_semilleros().await?;
            output::output(&semilleros, flags.format)
        }
        SemilleroCommands::Get { id } => {
            let Some(semillero) = svc.obtener_semillero(*id).await? else {
                bail!("no existe un semillero con id {id}");
            };
            output::output(&semillero, flags.format)
        }
        SemilleroCommands::Status { id, status } => {
            let nuevo_status: SemilleroStatus = status.parse()?;
            svc.cambiar_status_semillero(*id, nuevo_status).await?;
            output::output(&json!({"id": id, "status": nuevo_status}), flags.format)
        }
        SemilleroCommands::Activar { id } => {
            svc.activar_semillero(*id).await?;
            output::output(
                &json!({"id": id, "status": SemilleroStatus::Activo}),
                flags.format,
            )
        }
    }
}
