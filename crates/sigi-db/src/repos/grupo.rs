//! Grupo de investigación repository.
//!
//! Read-mostly external collaborator from the semillero lifecycle's
//! perspective; `crear_grupo` exists for seeding and tests.

use sigi_core::entities::GrupoInvestigacion;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, objetivos_from_json, objetivos_to_json, parse_datetime};
use crate::service::SigiService;

const SELECT_COLS: &str = "id, nombre, descripcion, lineas_investigacion, created_at";

fn row_to_grupo(row: &libsql::Row) -> Result<GrupoInvestigacion, DatabaseError> {
    Ok(GrupoInvestigacion {
        id: row.get(0)?,
        nombre: row.get(1)?,
        descripcion: get_opt_string(row, 2)?,
        lineas_investigacion: objetivos_from_json(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl SigiService {
    /// Create a research group.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an empty nombre, or a
    /// persistence error.
    pub async fn crear_grupo(
        &self,
        nombre: &str,
        descripcion: Option<&str>,
        lineas_investigacion: &[String],
    ) -> Result<GrupoInvestigacion, DatabaseError> {
        if nombre.trim().is_empty() {
            return Err(DatabaseError::Validation(vec![
                "El nombre del grupo es obligatorio".to_string(),
            ]));
        }

        let lineas_json = objetivos_to_json(lineas_investigacion)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO grupos_investigacion (nombre, descripcion, lineas_investigacion)
                 VALUES (?1, ?2, ?3)",
                libsql::params![nombre, descripcion, lineas_json.as_str()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        self.obtener_grupo(id)
            .await?
            .ok_or(DatabaseError::NotFound {
                entidad: "grupo de investigación",
                id,
            })
    }

    /// Fetch a grupo by id. Expected misses return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_grupo(
        &self,
        id: i64,
    ) -> Result<Option<GrupoInvestigacion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM grupos_investigacion WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_grupo(&row)?)),
            None => Ok(None),
        }
    }

    /// List all grupos ordered by nombre.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_grupos(&self) -> Result<Vec<GrupoInvestigacion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM grupos_investigacion ORDER BY nombre"),
                (),
            )
            .await?;
        let mut grupos = Vec::new();
        while let Some(row) = rows.next().await? {
            grupos.push(row_to_grupo(&row)?);
        }
        Ok(grupos)
    }

    /// Research lines of a grupo, used to suggest specific-objective text.
    /// A missing grupo yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_lineas_investigacion(
        &self,
        grupo_id: i64,
    ) -> Result<Vec<String>, DatabaseError> {
        Ok(self
            .obtener_grupo(grupo_id)
            .await?
            .map(|g| g.lineas_investigacion)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn crear_y_obtener_grupo() {
        let svc = test_service().await;
        let grupo = svc
            .crear_grupo(
                "Biotecnología",
                Some("Grupo de biotecnología aplicada"),
                &["Bioinformática".to_string(), "Genómica".to_string()],
            )
            .await
            .unwrap();
        assert!(grupo.id > 0);

        let fetched = svc.obtener_grupo(grupo.id).await.unwrap().unwrap();
        assert_eq!(fetched.nombre, "Biotecnología");
        assert_eq!(fetched.lineas_investigacion.len(), 2);
    }

    #[tokio::test]
    async fn obtener_grupo_inexistente_es_none() {
        let svc = test_service().await;
        assert!(svc.obtener_grupo(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn grupos_ordenados_por_nombre() {
        let svc = test_service().await;
        svc.crear_grupo("Zoología", None, &[]).await.unwrap();
        svc.crear_grupo("Astronomía", None, &[]).await.unwrap();

        let grupos = svc.obtener_grupos().await.unwrap();
        assert_eq!(grupos.len(), 2);
        assert_eq!(grupos[0].nombre, "Astronomía");
    }

    #[tokio::test]
    async fn lineas_de_grupo_inexistente_es_vacio() {
        let svc = test_service().await;
        assert!(
            svc.obtener_lineas_investigacion(42)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn crear_grupo_sin_nombre_falla() {
        let svc = test_service().await;
        let err = svc.crear_grupo("  ", None, &[]).await.unwrap_err();
        assert!(!err.violaciones().is_empty());
    }
}
