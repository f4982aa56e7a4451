use clap::Subcommand;

/// Grupo de investigación commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GrupoCommands {
    /// List all grupos.
    List,
    /// Get a grupo by id.
    Get { id: i64 },
    /// List the semilleros of a grupo.
    Semilleros { id: i64 },
    /// Create a grupo (seeding).
    Create {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: Option<String>,
        /// Research line; repeat for several.
        #[arg(long = "linea")]
        lineas: Vec<String>,
    },
}
