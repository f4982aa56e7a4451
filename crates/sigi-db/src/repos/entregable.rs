//! Entregable repository — the one-deliverable-per-semillero workflow.

use chrono::Utc;
use sigi_core::entities::{Entregable, NuevoEntregable};
use sigi_core::enums::{EntregableEstado, Rol};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_enum};
use crate::service::SigiService;

const SELECT_COLS: &str = "e.id, e.titulo, e.descripcion, e.tipo, e.semillero_id, \
     e.fecha_entrega, e.estado, s.nombre AS semillero_nombre";

fn row_to_entregable(row: &libsql::Row) -> Result<Entregable, DatabaseError> {
    Ok(Entregable {
        id: row.get(0)?,
        titulo: row.get(1)?,
        descripcion: get_opt_string(row, 2)?,
        tipo: parse_enum(&row.get::<String>(3)?)?,
        semillero_id: row.get(4)?,
        fecha_entrega: parse_date(&row.get::<String>(5)?)?,
        estado: parse_enum(&row.get::<String>(6)?)?,
        semillero_nombre: row.get::<Option<String>>(7)?,
    })
}

impl SigiService {
    /// Create the entregable for a semillero.
    ///
    /// A semillero holds at most one entregable; attempting a second one is
    /// a conflict and leaves the original untouched. `fecha_entrega`
    /// defaults to the current calendar date when absent; estado starts
    /// `pendiente`.
    ///
    /// # Errors
    ///
    /// * `Validation` — empty titulo.
    /// * `NotFound` — the semillero does not exist.
    /// * `Conflict` — the semillero already has an entregable.
    pub async fn crear_entregable(
        &self,
        nuevo: &NuevoEntregable,
    ) -> Result<Entregable, DatabaseError> {
        if nuevo.titulo.trim().is_empty() {
            return Err(DatabaseError::Validation(vec![
                "El título del entregable es obligatorio".to_string(),
            ]));
        }

        let Some(semillero) = self.obtener_semillero(nuevo.semillero_id).await? else {
            return Err(DatabaseError::NotFound {
                entidad: "semillero",
                id: nuevo.semillero_id,
            });
        };

        if self
            .obtener_entregable_por_semillero(nuevo.semillero_id)
            .await?
            .is_some()
        {
            return Err(DatabaseError::Conflict(
                "Este semillero ya tiene un entregable asignado".to_string(),
            ));
        }

        let fecha = nuevo
            .fecha_entrega
            .unwrap_or_else(|| Utc::now().date_naive());

        self.db()
            .conn()
            .execute(
                "INSERT INTO entregables (titulo, descripcion, tipo, semillero_id, fecha_entrega, estado)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    nuevo.titulo.as_str(),
                    nuevo.descripcion.as_deref(),
                    nuevo.tipo.as_str(),
                    nuevo.semillero_id,
                    fecha.format("%Y-%m-%d").to_string(),
                    EntregableEstado::Pendiente.as_str()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        Ok(Entregable {
            id,
            titulo: nuevo.titulo.clone(),
            descripcion: nuevo.descripcion.clone(),
            tipo: nuevo.tipo,
            semillero_id: nuevo.semillero_id,
            semillero_nombre: Some(semillero.nombre),
            fecha_entrega: fecha,
            estado: EntregableEstado::Pendiente,
        })
    }

    /// Fetch the entregable of a semillero, enriched with the semillero's
    /// display name. Expected misses return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_entregable_por_semillero(
        &self,
        semillero_id: i64,
    ) -> Result<Option<Entregable>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM entregables e
                     LEFT JOIN semilleros s ON e.semillero_id = s.id
                     WHERE e.semillero_id = ?1"
                ),
                [semillero_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_entregable(&row)?)),
            None => Ok(None),
        }
    }

    /// List all entregables ordered by (estado, semillero nombre).
    ///
    /// The ordering is a presentation convenience the listing screens rely
    /// on, kept here for compatibility.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_entregables(&self) -> Result<Vec<Entregable>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM entregables e
                     LEFT JOIN semilleros s ON e.semillero_id = s.id
                     ORDER BY e.estado, s.nombre"
                ),
                (),
            )
            .await?;
        let mut entregables = Vec::new();
        while let Some(row) = rows.next().await? {
            entregables.push(row_to_entregable(&row)?);
        }
        Ok(entregables)
    }

    /// Overwrite an entregable's estado.
    ///
    /// No transition guard: any estado is reachable from any estado.
    /// Free-text estados are rejected upstream at the `FromStr` boundary,
    /// so an invalid value never reaches this method.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entregable does not exist.
    pub async fn cambiar_estado_entregable(
        &self,
        id: i64,
        nuevo_estado: EntregableEstado,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE entregables SET estado = ?1 WHERE id = ?2",
                libsql::params![nuevo_estado.as_str(), id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entidad: "entregable",
                id,
            });
        }
        Ok(())
    }

    /// Approve or reject an entregable.
    ///
    /// The operator's capability is an explicit parameter: only
    /// `Rol::Tutor` may review. On success returns the estado written.
    ///
    /// # Errors
    ///
    /// * `Forbidden` — the rol may not review entregables.
    /// * `NotFound` — the entregable does not exist (state untouched).
    pub async fn aprobar_denegar_entregable(
        &self,
        id: i64,
        aprobado: bool,
        rol: Rol,
    ) -> Result<EntregableEstado, DatabaseError> {
        if !rol.puede_revisar() {
            return Err(DatabaseError::Forbidden(format!(
                "el rol '{rol}' no puede aprobar o rechazar entregables"
            )));
        }

        let nuevo_estado = if aprobado {
            EntregableEstado::Aprobado
        } else {
            EntregableEstado::Rechazado
        };
        self.cambiar_estado_entregable(id, nuevo_estado).await?;
        Ok(nuevo_estado)
    }
}
