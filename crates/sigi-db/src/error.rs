//! Database error types for sigi-db.

use thiserror::Error;

/// Errors from database operations.
///
/// Validation violations are carried as data (`Validation` holds the full
/// list of human-readable messages, all collected in one pass) so callers
/// can render every violation, not just the first.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Structural invariant violations, all collected before any write.
    #[error("Validación fallida: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The operation conflicts with existing state (e.g., a second
    /// entregable for a semillero).
    #[error("{0}")]
    Conflict(String),

    /// A mutation targeted a row that does not exist. Reads signal expected
    /// misses as `Ok(None)` instead.
    #[error("No existe {entidad} con id {id}")]
    NotFound { entidad: &'static str, id: i64 },

    /// The operator's rol does not permit the operation.
    #[error("Operación no autorizada: {0}")]
    Forbidden(String),

    /// Activation requires the semillero's entregable to be aprobado.
    #[error(
        "El semillero {semillero_id} no puede activarse: su entregable no está aprobado"
    )]
    EntregableNotApproved { semillero_id: i64 },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// The violation messages carried by a `Validation` error, if any.
    #[must_use]
    pub fn violaciones(&self) -> &[String] {
        match self {
            Self::Validation(v) => v,
            _ => &[],
        }
    }
}
