use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TipoInvestigador;

/// A researcher (estudiante or tutor), optionally attached to one semillero.
///
/// Plain value type: name validation is enforced by the service at the
/// insert boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Investigador {
    pub id: i64,
    pub nombre: String,
    pub tipo: TipoInvestigador,
    pub email: Option<String>,
    pub semillero_id: Option<i64>,
}

/// Creation input for an investigador: a single explicit nombre/tipo/email
/// triple. Call sites normalize into this before invoking the service.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NuevoInvestigador {
    pub nombre: String,
    pub tipo: TipoInvestigador,
    pub email: Option<String>,
}

impl NuevoInvestigador {
    #[must_use]
    pub fn new(nombre: impl Into<String>, tipo: TipoInvestigador, email: Option<String>) -> Self {
        Self {
            nombre: nombre.into(),
            tipo,
            email,
        }
    }

    /// Convenience constructor for students.
    #[must_use]
    pub fn estudiante(nombre: impl Into<String>) -> Self {
        Self::new(nombre, TipoInvestigador::Estudiante, None)
    }

    /// Convenience constructor for tutors.
    #[must_use]
    pub fn tutor(nombre: impl Into<String>) -> Self {
        Self::new(nombre, TipoInvestigador::Tutor, None)
    }
}
