//! Entity structs for all SIGI domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON round-tripping and
//! CLI output. The `Nuevo*` structs are the explicit creation inputs used by
//! the service layer.

mod entregable;
mod grupo;
mod investigador;
mod semillero;

pub use entregable::{Entregable, NuevoEntregable};
pub use grupo::GrupoInvestigacion;
pub use investigador::{Investigador, NuevoInvestigador};
pub use semillero::{NuevoSemillero, Semillero};
