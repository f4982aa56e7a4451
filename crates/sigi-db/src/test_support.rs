//! Shared test utilities for sigi-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use sigi_core::entities::{NuevoEntregable, NuevoSemillero};
    use sigi_core::enums::TipoEntregable;

    use crate::SigiDb;
    use crate::service::SigiService;

    /// Create an in-memory service for pure DB tests.
    pub async fn test_service() -> SigiService {
        let db = SigiDb::open_local(":memory:").await.unwrap();
        SigiService::from_db(db)
    }

    /// Seed one grupo and return its id.
    pub async fn seed_grupo(svc: &SigiService) -> i64 {
        svc.crear_grupo(
            "Biotecnología",
            Some("Grupo de prueba"),
            &["Bioinformática".to_string()],
        )
        .await
        .unwrap()
        .id
    }

    /// A valid unstaffed semillero input for the given grupo.
    pub fn nuevo_semillero(grupo_id: i64) -> NuevoSemillero {
        NuevoSemillero {
            nombre: "Semillero de Prueba".to_string(),
            objetivo_principal: "Objetivo de prueba".to_string(),
            objetivos_especificos: vec!["Objetivo específico 1".to_string()],
            grupo_id: Some(grupo_id),
            estudiantes: Vec::new(),
            tutores: Vec::new(),
        }
    }

    /// A valid entregable input for the given semillero.
    pub fn nuevo_entregable(semillero_id: i64) -> NuevoEntregable {
        NuevoEntregable {
            titulo: "Informe de avance".to_string(),
            descripcion: Some("Primer informe semestral".to_string()),
            tipo: TipoEntregable::Informe,
            semillero_id,
            fecha_entrega: None,
        }
    }
}
