use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A research group. Parent of zero or more semilleros; read-mostly from
/// the semillero lifecycle's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GrupoInvestigacion {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Research lines, used only to suggest specific-objective text.
    pub lineas_investigacion: Vec<String>,
    pub created_at: DateTime<Utc>,
}
