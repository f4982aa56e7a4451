use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Investigador, NuevoInvestigador};
use crate::enums::SemilleroStatus;

/// A research semillero: the unit of staffing and entregable tracking.
///
/// Loaded eagerly with its investigadores partitioned by tipo. The lists are
/// owned by this struct for the duration of a load; the underlying rows are
/// shared state keyed by their own id plus a `semillero_id` foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Semillero {
    pub id: i64,
    pub nombre: String,
    pub objetivo_principal: String,
    pub objetivos_especificos: Vec<String>,
    pub grupo_id: i64,
    /// Denormalized display name of the owning grupo.
    pub grupo_nombre: Option<String>,
    pub status: SemilleroStatus,
    pub estudiantes: Vec<Investigador>,
    pub tutores: Vec<Investigador>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input for a semillero, staffed at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NuevoSemillero {
    pub nombre: String,
    pub objetivo_principal: String,
    pub objetivos_especificos: Vec<String>,
    pub grupo_id: Option<i64>,
    pub estudiantes: Vec<NuevoInvestigador>,
    pub tutores: Vec<NuevoInvestigador>,
}

impl NuevoSemillero {
    /// Check the five staffing invariants, collecting ALL violations.
    ///
    /// Pure: no side effects. Returns an empty vec iff the semillero is
    /// valid:
    /// 1. nombre non-empty
    /// 2. objetivo principal non-empty
    /// 3. grupo reference present
    /// 4. at most 2 tutores
    /// 5. zero estudiantes (unstaffed) or at least 2
    #[must_use]
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();

        if self.nombre.trim().is_empty() {
            errores.push("El nombre del semillero es obligatorio".to_string());
        }
        if self.objetivo_principal.trim().is_empty() {
            errores.push("El objetivo principal es obligatorio".to_string());
        }
        if self.grupo_id.is_none() {
            errores.push(
                "El semillero debe estar asociado a un grupo de investigación".to_string(),
            );
        }
        if self.tutores.len() > 2 {
            errores.push("Un semillero puede tener máximo 2 tutores".to_string());
        }
        if self.estudiantes.len() == 1 {
            errores.push("Un semillero debe tener al menos 2 estudiantes".to_string());
        }

        errores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn semillero_base() -> NuevoSemillero {
        NuevoSemillero {
            nombre: "Semillero de Prueba".to_string(),
            objetivo_principal: "Objetivo de prueba".to_string(),
            objetivos_especificos: vec![
                "Objetivo específico 1".to_string(),
                "Objetivo específico 2".to_string(),
            ],
            grupo_id: Some(1),
            estudiantes: Vec::new(),
            tutores: Vec::new(),
        }
    }

    #[test]
    fn semillero_valido_sin_errores() {
        let semillero = semillero_base();
        assert_eq!(semillero.validar(), Vec::<String>::new());
    }

    #[test]
    fn semillero_vacio_reporta_todas_las_violaciones() {
        let semillero = NuevoSemillero {
            nombre: String::new(),
            objetivo_principal: String::new(),
            objetivos_especificos: Vec::new(),
            grupo_id: None,
            estudiantes: Vec::new(),
            tutores: Vec::new(),
        };
        let errores = semillero.validar();
        // All three structural violations reported in one call, not just
        // the first.
        assert_eq!(errores.len(), 3);
    }

    #[test]
    fn tres_tutores_es_invalido() {
        let mut semillero = semillero_base();
        semillero.tutores = vec![
            NuevoInvestigador::tutor("Tutor 1"),
            NuevoInvestigador::tutor("Tutor 2"),
        ];
        assert!(semillero.validar().is_empty());

        semillero.tutores.push(NuevoInvestigador::tutor("Tutor 3"));
        let errores = semillero.validar();
        assert!(errores.iter().any(|e| e.to_lowercase().contains("tutores")));
    }

    #[test]
    fn un_solo_estudiante_es_invalido() {
        let mut semillero = semillero_base();
        semillero.estudiantes = vec![NuevoInvestigador::estudiante("Estudiante 1")];
        let errores = semillero.validar();
        assert!(
            errores
                .iter()
                .any(|e| e.to_lowercase().contains("estudiantes"))
        );

        // Zero students is valid (unstaffed at creation time), as is >= 2.
        semillero.estudiantes.clear();
        assert!(semillero.validar().is_empty());
        semillero.estudiantes = vec![
            NuevoInvestigador::estudiante("Estudiante 1"),
            NuevoInvestigador::estudiante("Estudiante 2"),
        ];
        assert!(semillero.validar().is_empty());
    }

    #[test]
    fn nombre_con_solo_espacios_es_invalido() {
        let mut semillero = semillero_base();
        semillero.nombre = "   ".to_string();
        let errores = semillero.validar();
        assert_eq!(errores.len(), 1);
        assert!(errores[0].contains("nombre"));
    }
}
