use clap::Subcommand;

/// Entregable commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntregableCommands {
    /// Assign the entregable to a semillero (one per semillero).
    Create {
        #[arg(long)]
        titulo: String,
        #[arg(long)]
        descripcion: Option<String>,
        /// Tipo: informe, articulo, poster, ponencia, prototipo.
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        semillero: i64,
        /// Submission date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        fecha: Option<String>,
    },
    /// Get the entregable of a semillero.
    Get {
        #[arg(long)]
        semillero: i64,
    },
    /// List all entregables (ordered by estado, then semillero).
    List,
    /// Overwrite the estado: pendiente, aprobado, rechazado.
    Estado {
        id: i64,
        estado: String,
    },
    /// Approve or reject an entregable (tutores only).
    Revisar {
        id: i64,
        /// Approve; mutually exclusive with --rechazar.
        #[arg(long, conflicts_with = "rechazar")]
        aprobar: bool,
        /// Reject.
        #[arg(long)]
        rechazar: bool,
        /// Operator rol: estudiante, tutor. Falls back to config.
        #[arg(long)]
        rol: Option<String>,
    },
}
