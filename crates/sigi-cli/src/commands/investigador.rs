use serde_json::json;
use sigi_core::entities::NuevoInvestigador;
use sigi_core::enums::TipoInvestigador;
use sigi_db::service::SigiService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InvestigadorCommands;
use crate::output;

/// Handle `sigi investigador`.
///
/// # Errors
///
/// Returns an error for invalid tipos, missing rows, or persistence
/// failures.
pub async fn handle(
    action: &InvestigadorCommands,
    svc: &SigiService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InvestigadorCommands::Add {
            nombre,
            tipo,
            email,
        } => {
            let tipo: TipoInvestigador = tipo.parse()?;
            let investigador = svc
                .agregar_investigador(&NuevoInvestigador::new(nombre, tipo, email.clone()))
                .await?;
            output::output(&investigador, flags.format)
        }
        InvestigadorCommands::Asignar { id, semillero } => {
            svc.asignar_investigador(*id, *semillero).await?;
            output::output(
                &json!({"id": id, "semillero_id": semillero}),
                flags.format,
            )
        }
        InvestigadorCommands::Tutores => {
            let tutores = svc.obtener_tutores().await?;
            output::output(&tutores, flags.format)
        }
        InvestigadorCommands::Estudiantes => {
            let estudiantes = svc.obtener_estudiantes().await?;
            output::output(&estudiantes, flags.format)
        }
    }
}
