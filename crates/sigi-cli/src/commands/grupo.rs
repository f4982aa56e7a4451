use anyhow::bail;
use sigi_db::service::SigiService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GrupoCommands;
use crate::output;

/// Handle `sigi grupo`.
///
/// # Errors
///
/// Returns an error for missing grupos or persistence failures.
pub async fn handle(
    action: &GrupoCommands,
    svc: &SigiService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GrupoCommands::List => {
            let grupos = svc.obtener_grupos().await?;
            output::output(&grupos, flags.format)
        }
        GrupoCommands::Get { id } => {
            let Some(grupo) = svc.obtener_grupo(*id).await? else {
                bail!("no existe un grupo de investigación con id {id}");
            };
            output::output(&grupo, flags.format)
        }
        GrupoCommands::Semilleros { id } => {
            let semilleros = svc.obtener_semilleros_por_grupo(*id).await?;
            if semilleros.is_empty() && !flags.quiet {
                eprintln!("El grupo {id} no tiene semilleros asociados.");
            }
            output::output(&semilleros, flags.format)
        }
        GrupoCommands::Create {
            nombre,
            descripcion,
            lineas,
        } => {
            let grupo = svc
                .crear_grupo(nombre, descripcion.as_deref(), lineas)
                .await?;
            output::output(&grupo, flags.format)
        }
    }
}
