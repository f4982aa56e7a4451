//! Status and type enums for SIGI entities.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all =
//! "snake_case")]` and expose `as_str()` for SQL storage plus `FromStr` for
//! parsing operator input. Statuses arriving as free text (CLI arguments,
//! stored rows) must pass through `FromStr`; anything outside the enumerated
//! set is rejected there, before any service call is made.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TipoInvestigador
// ---------------------------------------------------------------------------

/// Kind of researcher attached to a semillero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TipoInvestigador {
    Estudiante,
    Tutor,
}

impl TipoInvestigador {
    /// String representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Estudiante => "estudiante",
            Self::Tutor => "tutor",
        }
    }
}

impl fmt::Display for TipoInvestigador {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoInvestigador {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "estudiante" => Ok(Self::Estudiante),
            "tutor" => Ok(Self::Tutor),
            other => Err(CoreError::ValorInvalido {
                campo: "tipo de investigador".to_string(),
                valor: other.to_string(),
                validos: "estudiante, tutor".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SemilleroStatus
// ---------------------------------------------------------------------------

/// Status of a semillero.
///
/// ```text
/// pendiente ⇄ activo
/// ```
///
/// The `pendiente → activo` transition through `activar_semillero` is gated
/// on the semillero's entregable being `aprobado`; the plain status-change
/// operation toggles freely (operator override path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SemilleroStatus {
    Pendiente,
    Activo,
}

impl SemilleroStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Activo => "activo",
        }
    }
}

impl fmt::Display for SemilleroStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemilleroStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(Self::Pendiente),
            "activo" => Ok(Self::Activo),
            other => Err(CoreError::ValorInvalido {
                campo: "status de semillero".to_string(),
                valor: other.to_string(),
                validos: "pendiente, activo".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// EntregableEstado
// ---------------------------------------------------------------------------

/// Review state of an entregable.
///
/// ```text
/// pendiente → aprobado
///           → rechazado
/// ```
///
/// The machine is fully connected: `aprobado` and `rechazado` can move back
/// to `pendiente` (reset) or to each other (re-review). There is no
/// transition guard — any state is reachable from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntregableEstado {
    Pendiente,
    Aprobado,
    Rechazado,
}

impl EntregableEstado {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Aprobado => "aprobado",
            Self::Rechazado => "rechazado",
        }
    }
}

impl fmt::Display for EntregableEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntregableEstado {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(Self::Pendiente),
            "aprobado" => Ok(Self::Aprobado),
            "rechazado" => Ok(Self::Rechazado),
            other => Err(CoreError::ValorInvalido {
                campo: "estado de entregable".to_string(),
                valor: other.to_string(),
                validos: "pendiente, aprobado, rechazado".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TipoEntregable
// ---------------------------------------------------------------------------

/// Valid entregable types.
///
/// This is the explicit valid-type set; tipos outside this enum never reach
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TipoEntregable {
    Informe,
    Articulo,
    Poster,
    Ponencia,
    Prototipo,
}

impl TipoEntregable {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Informe => "informe",
            Self::Articulo => "articulo",
            Self::Poster => "poster",
            Self::Ponencia => "ponencia",
            Self::Prototipo => "prototipo",
        }
    }
}

impl fmt::Display for TipoEntregable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoEntregable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "informe" => Ok(Self::Informe),
            "articulo" => Ok(Self::Articulo),
            "poster" => Ok(Self::Poster),
            "ponencia" => Ok(Self::Ponencia),
            "prototipo" => Ok(Self::Prototipo),
            other => Err(CoreError::ValorInvalido {
                campo: "tipo de entregable".to_string(),
                valor: other.to_string(),
                validos: "informe, articulo, poster, ponencia, prototipo".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Rol
// ---------------------------------------------------------------------------

/// Capability of the operator invoking a review operation.
///
/// Passed explicitly into `aprobar_denegar_entregable` — only tutores may
/// approve or reject an entregable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rol {
    Estudiante,
    Tutor,
}

impl Rol {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Estudiante => "estudiante",
            Self::Tutor => "tutor",
        }
    }

    /// Whether this rol may approve or reject entregables.
    #[must_use]
    pub const fn puede_revisar(self) -> bool {
        matches!(self, Self::Tutor)
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "estudiante" => Ok(Self::Estudiante),
            "tutor" => Ok(Self::Tutor),
            other => Err(CoreError::ValorInvalido {
                campo: "rol".to_string(),
                valor: other.to_string(),
                validos: "estudiante, tutor".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pendiente", SemilleroStatus::Pendiente)]
    #[case("activo", SemilleroStatus::Activo)]
    fn semillero_status_parses(#[case] input: &str, #[case] expected: SemilleroStatus) {
        assert_eq!(input.parse::<SemilleroStatus>().unwrap(), expected);
    }

    #[test]
    fn semillero_status_rejects_unknown_value() {
        let err = "bogus".parse::<SemilleroStatus>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("pendiente, activo"));
    }

    #[rstest]
    #[case("pendiente", EntregableEstado::Pendiente)]
    #[case("aprobado", EntregableEstado::Aprobado)]
    #[case("rechazado", EntregableEstado::Rechazado)]
    fn entregable_estado_parses(#[case] input: &str, #[case] expected: EntregableEstado) {
        assert_eq!(input.parse::<EntregableEstado>().unwrap(), expected);
    }

    #[test]
    fn entregable_estado_rejects_unknown_value() {
        assert!("bogus".parse::<EntregableEstado>().is_err());
        // Case matters: the stored form is lowercase.
        assert!("Aprobado".parse::<EntregableEstado>().is_err());
    }

    #[test]
    fn tipo_entregable_rejects_unknown_value() {
        assert!("tesis".parse::<TipoEntregable>().is_err());
        assert_eq!(
            "informe".parse::<TipoEntregable>().unwrap(),
            TipoEntregable::Informe
        );
    }

    #[test]
    fn serde_round_trip_matches_as_str() {
        let json = serde_json::to_string(&EntregableEstado::Rechazado).unwrap();
        assert_eq!(json, "\"rechazado\"");
        let back: EntregableEstado = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntregableEstado::Rechazado);
    }

    #[test]
    fn solo_tutores_pueden_revisar() {
        assert!(Rol::Tutor.puede_revisar());
        assert!(!Rol::Estudiante.puede_revisar());
    }
}
