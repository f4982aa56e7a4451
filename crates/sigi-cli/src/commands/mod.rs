//! Command handlers, one module per entity subcommand group.

pub mod entregable;
pub mod grupo;
pub mod investigador;
pub mod semillero;

use sigi_config::SigiConfig;
use sigi_db::service::SigiService;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
///
/// # Errors
///
/// Propagates handler errors to `main` for rendering.
pub async fn dispatch(
    command: &Commands,
    svc: &SigiService,
    flags: &GlobalFlags,
    config: &SigiConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Grupo { action } => grupo::handle(action, svc, flags).await,
        Commands::Semillero { action } => semillero::handle(action, svc, flags).await,
        Commands::Investigador { action } => investigador::handle(action, svc, flags).await,
        Commands::Entregable { action } => entregable::handle(action, svc, flags, config).await,
    }
}
