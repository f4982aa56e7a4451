//! Semillero repository — creation, staffed loads, and status lifecycle.
//!
//! `crear_semillero` is the one multi-row write in the system: the semillero
//! row and all of its investigador rows are inserted inside a single
//! transaction, so a failure partway through leaves no orphaned semillero.

use sigi_core::entities::{NuevoInvestigador, NuevoSemillero, Semillero};
use sigi_core::enums::{EntregableEstado, SemilleroStatus, TipoInvestigador};

use crate::error::DatabaseError;
use crate::helpers::{
    objetivos_from_json, objetivos_to_json, parse_datetime, parse_enum,
};
use crate::service::SigiService;

const SELECT_COLS: &str = "s.id, s.nombre, s.objetivo_principal, s.objetivos_especificos, \
     s.grupo_id, s.status, s.created_at, s.updated_at, g.nombre AS grupo_nombre";

fn row_to_semillero(row: &libsql::Row) -> Result<Semillero, DatabaseError> {
    Ok(Semillero {
        id: row.get(0)?,
        nombre: row.get(1)?,
        objetivo_principal: row.get(2)?,
        objetivos_especificos: objetivos_from_json(&row.get::<String>(3)?)?,
        grupo_id: row.get(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
        grupo_nombre: row.get::<Option<String>>(8)?,
        estudiantes: Vec::new(),
        tutores: Vec::new(),
    })
}

/// Staffing violations beyond the structural ones `validar` covers:
/// every investigador attached at creation time needs a non-empty nombre.
fn validar_nombres(staff: &[NuevoInvestigador], tipo: TipoInvestigador) -> Option<String> {
    staff
        .iter()
        .any(|inv| inv.nombre.trim().is_empty())
        .then(|| format!("Todos los {}s deben tener nombre", tipo.as_str()))
}

impl SigiService {
    /// Create a semillero together with its investigadores.
    ///
    /// Runs `validar` first; violations are returned as data inside
    /// `DatabaseError::Validation` without touching storage. The semillero
    /// row and its staff rows are written in one transaction — on any
    /// failure the whole creation rolls back.
    ///
    /// # Errors
    ///
    /// * `Validation` — staffing invariant violations (all collected).
    /// * `NotFound` — the referenced grupo does not exist.
    /// * Persistence errors from the underlying store.
    pub async fn crear_semillero(&self, nuevo: &NuevoSemillero) -> Result<i64, DatabaseError> {
        let mut errores = nuevo.validar();
        if let Some(e) = validar_nombres(&nuevo.estudiantes, TipoInvestigador::Estudiante) {
            errores.push(e);
        }
        if let Some(e) = validar_nombres(&nuevo.tutores, TipoInvestigador::Tutor) {
            errores.push(e);
        }
        if !errores.is_empty() {
            return Err(DatabaseError::Validation(errores));
        }

        // validar already rejected a missing grupo_id
        let Some(grupo_id) = nuevo.grupo_id else {
            return Err(DatabaseError::Validation(vec![
                "El semillero debe estar asociado a un grupo de investigación".to_string(),
            ]));
        };
        if self.obtener_grupo(grupo_id).await?.is_none() {
            return Err(DatabaseError::NotFound {
                entidad: "grupo de investigación",
                id: grupo_id,
            });
        }

        let objetivos_json = objetivos_to_json(&nuevo.objetivos_especificos)?;
        let tx = self.db().conn().transaction().await?;
        match Self::insertar_semillero_tx(&tx, nuevo, grupo_id, &objetivos_json).await {
            Ok(id) => {
                tx.commit().await?;
                Ok(id)
            }
            Err(e) => {
                tracing::warn!("crear_semillero rolled back: {e}");
                let _ = tx.rollback().await;
                Err(e)
            }
        }
    }

    async fn insertar_semillero_tx(
        tx: &libsql::Transaction,
        nuevo: &NuevoSemillero,
        grupo_id: i64,
        objetivos_json: &str,
    ) -> Result<i64, DatabaseError> {
        tx.execute(
            "INSERT INTO semilleros (nombre, objetivo_principal, objetivos_especificos, grupo_id, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                nuevo.nombre.as_str(),
                nuevo.objetivo_principal.as_str(),
                objetivos_json,
                grupo_id,
                SemilleroStatus::Pendiente.as_str()
            ],
        )
        .await?;
        let semillero_id = tx.last_insert_rowid();

        for (staff, tipo) in [
            (&nuevo.estudiantes, TipoInvestigador::Estudiante),
            (&nuevo.tutores, TipoInvestigador::Tutor),
        ] {
            for inv in staff {
                tx.execute(
                    "INSERT INTO investigadores (nombre, tipo, email, semillero_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![
                        inv.nombre.as_str(),
                        tipo.as_str(),
                        inv.email.as_deref(),
                        semillero_id
                    ],
                )
                .await?;
            }
        }

        Ok(semillero_id)
    }

    /// Fetch a semillero with its grupo display name and staff lists loaded.
    /// Expected misses return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_semillero(&self, id: i64) -> Result<Option<Semillero>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM semilleros s
                     JOIN grupos_investigacion g ON s.grupo_id = g.id
                     WHERE s.id = ?1"
                ),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => {
                let mut semillero = row_to_semillero(&row)?;
                self.cargar_investigadores(&mut semillero).await?;
                Ok(Some(semillero))
            }
            None => Ok(None),
        }
    }

    /// List all semilleros ordered by nombre, staff lists loaded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_semilleros(&self) -> Result<Vec<Semillero>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM semilleros s
                     JOIN grupos_investigacion g ON s.grupo_id = g.id
                     ORDER BY s.nombre"
                ),
                (),
            )
            .await?;
        let mut semilleros = Vec::new();
        while let Some(row) = rows.next().await? {
            semilleros.push(row_to_semillero(&row)?);
        }
        for semillero in &mut semilleros {
            self.cargar_investigadores(semillero).await?;
        }
        Ok(semilleros)
    }

    /// List the semilleros of one grupo, ordered by nombre. Lighter listing
    /// path: staff lists stay empty.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_semilleros_por_grupo(
        &self,
        grupo_id: i64,
    ) -> Result<Vec<Semillero>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM semilleros s
                     JOIN grupos_investigacion g ON s.grupo_id = g.id
                     WHERE s.grupo_id = ?1
                     ORDER BY s.nombre"
                ),
                [grupo_id],
            )
            .await?;
        let mut semilleros = Vec::new();
        while let Some(row) = rows.next().await? {
            semilleros.push(row_to_semillero(&row)?);
        }
        Ok(semilleros)
    }

    /// Load a semillero's investigadores, ordered by (tipo, nombre) and
    /// partitioned into estudiantes and tutores.
    async fn cargar_investigadores(&self, semillero: &mut Semillero) -> Result<(), DatabaseError> {
        let investigadores = self.obtener_investigadores_por_semillero(semillero.id).await?;
        for inv in investigadores {
            match inv.tipo {
                TipoInvestigador::Estudiante => semillero.estudiantes.push(inv),
                TipoInvestigador::Tutor => semillero.tutores.push(inv),
            }
        }
        Ok(())
    }

    /// Overwrite a semillero's status unconditionally.
    ///
    /// This is the explicit operator override path: it does NOT consult the
    /// entregable. Use [`Self::activar_semillero`] for guarded activation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the semillero does not exist.
    pub async fn cambiar_status_semillero(
        &self,
        id: i64,
        nuevo_status: SemilleroStatus,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE semilleros SET status = ?1, updated_at = datetime('now') WHERE id = ?2",
                libsql::params![nuevo_status.as_str(), id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entidad: "semillero",
                id,
            });
        }
        Ok(())
    }

    /// Lightweight existence probe, cheaper than a full staffed load.
    pub(crate) async fn semillero_existe(&self, id: i64) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM semilleros WHERE id = ?1", [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Activate a semillero, gated on its entregable being aprobado.
    ///
    /// The guard lives here, not in the presentation layer: the semillero's
    /// entregable is looked up and activation fails unless its estado is
    /// `aprobado`.
    ///
    /// # Errors
    ///
    /// * `NotFound` — the semillero does not exist.
    /// * `EntregableNotApproved` — no entregable, or not aprobado.
    pub async fn activar_semillero(&self, id: i64) -> Result<(), DatabaseError> {
        if !self.semillero_existe(id).await? {
            return Err(DatabaseError::NotFound {
                entidad: "semillero",
                id,
            });
        }

        let aprobado = self
            .obtener_entregable_por_semillero(id)
            .await?
            .is_some_and(|e| e.estado == EntregableEstado::Aprobado);
        if !aprobado {
            return Err(DatabaseError::EntregableNotApproved { semillero_id: id });
        }

        self.cambiar_status_semillero(id, SemilleroStatus::Activo)
            .await
    }
}
