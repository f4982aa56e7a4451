//! Cross-cutting error types for SIGI.
//!
//! Domain-specific errors (e.g., `DatabaseError`) live in their respective
//! crates; this module holds errors that can originate from any crate.

use thiserror::Error;

/// Errors that can be raised by any SIGI crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A free-text value did not match any member of an enumerated set.
    #[error("Valor inválido para {campo}: '{valor}'. Debe ser uno de: {validos}")]
    ValorInvalido {
        campo: String,
        valor: String,
        validos: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Error de validación: {0}")]
    Validacion(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
