use clap::{Parser, Subcommand};

pub mod global;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};

use subcommands::{
    EntregableCommands, GrupoCommands, InvestigadorCommands, SemilleroCommands,
};

/// Top-level CLI parser for the `sigi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sigi",
    version,
    about = "SIGI - gestión de grupos y semilleros de investigación"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Database file path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Entity subcommand groups.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Grupos de investigación (read-mostly collaborator)
    Grupo {
        #[command(subcommand)]
        action: GrupoCommands,
    },
    /// Semilleros de investigación
    Semillero {
        #[command(subcommand)]
        action: SemilleroCommands,
    },
    /// Investigadores (estudiantes y tutores)
    Investigador {
        #[command(subcommand)]
        action: InvestigadorCommands,
    },
    /// Entregables y su flujo de aprobación
    Entregable {
        #[command(subcommand)]
        action: EntregableCommands,
    },
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            db: self.db.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
