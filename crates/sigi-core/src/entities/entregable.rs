use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntregableEstado, TipoEntregable};

/// The single deliverable tracked per semillero, with an approval workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entregable {
    pub id: i64,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo: TipoEntregable,
    pub semillero_id: i64,
    /// Denormalized display name of the owning semillero.
    pub semillero_nombre: Option<String>,
    /// Submission date (calendar date, no time component).
    pub fecha_entrega: NaiveDate,
    pub estado: EntregableEstado,
}

/// Creation input for an entregable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NuevoEntregable {
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo: TipoEntregable,
    pub semillero_id: i64,
    /// Defaults to the current calendar date when absent.
    pub fecha_entrega: Option<NaiveDate>,
}
