use clap::Subcommand;

/// Semillero commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SemilleroCommands {
    /// Create a semillero, optionally staffed.
    Create {
        #[arg(long)]
        nombre: String,
        /// Objetivo principal.
        #[arg(long)]
        objetivo: String,
        /// Objetivo específico; repeat for several (order preserved).
        #[arg(long = "objetivo-especifico")]
        objetivos_especificos: Vec<String>,
        /// Owning grupo id.
        #[arg(long)]
        grupo: i64,
        /// Student name; repeat for several.
        #[arg(long = "estudiante")]
        estudiantes: Vec<String>,
        /// Tutor name; repeat for several (at most 2 pass validation).
        #[arg(long = "tutor")]
        tutores: Vec<String>,
    },
    /// List all semilleros.
    List,
    /// Get a semillero by id, staff included.
    Get { id: i64 },
    /// Overwrite the status (operator override; pendiente or activo).
    Status {
        id: i64,
        /// New status: pendiente, activo.
        status: String,
    },
    /// Activate a semillero (requires its entregable to be aprobado).
    Activar { id: i64 },
}
