use clap::Subcommand;

/// Investigador commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InvestigadorCommands {
    /// Add a standalone investigador.
    Add {
        #[arg(long)]
        nombre: String,
        /// Tipo: estudiante, tutor.
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Assign (or reassign) an investigador to a semillero.
    Asignar {
        id: i64,
        #[arg(long)]
        semillero: i64,
    },
    /// List all tutores.
    Tutores,
    /// List all estudiantes.
    Estudiantes,
}
