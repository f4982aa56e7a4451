//! Subcommand definitions, one module per entity.

mod entregable;
mod grupo;
mod investigador;
mod semillero;

pub use entregable::EntregableCommands;
pub use grupo::GrupoCommands;
pub use investigador::InvestigadorCommands;
pub use semillero::SemilleroCommands;
