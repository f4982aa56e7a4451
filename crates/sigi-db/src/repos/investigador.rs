//! Investigador repository — standalone creation, semillero assignment,
//! and system-wide listings.

use sigi_core::entities::{Investigador, NuevoInvestigador};
use sigi_core::enums::TipoInvestigador;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::SigiService;

const SELECT_COLS: &str = "id, nombre, tipo, email, semillero_id";

fn row_to_investigador(row: &libsql::Row) -> Result<Investigador, DatabaseError> {
    Ok(Investigador {
        id: row.get(0)?,
        nombre: row.get(1)?,
        tipo: parse_enum(&row.get::<String>(2)?)?,
        email: get_opt_string(row, 3)?,
        semillero_id: row.get::<Option<i64>>(4)?,
    })
}

impl SigiService {
    /// Create a standalone investigador (no semillero assignment yet).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an empty nombre.
    pub async fn agregar_investigador(
        &self,
        nuevo: &NuevoInvestigador,
    ) -> Result<Investigador, DatabaseError> {
        if nuevo.nombre.trim().is_empty() {
            return Err(DatabaseError::Validation(vec![
                "El nombre del investigador es obligatorio".to_string(),
            ]));
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO investigadores (nombre, tipo, email) VALUES (?1, ?2, ?3)",
                libsql::params![
                    nuevo.nombre.as_str(),
                    nuevo.tipo.as_str(),
                    nuevo.email.as_deref()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        Ok(Investigador {
            id,
            nombre: nuevo.nombre.clone(),
            tipo: nuevo.tipo,
            email: nuevo.email.clone(),
            semillero_id: None,
        })
    }

    /// Assign (or reassign) an investigador to a semillero by updating its
    /// foreign reference.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when either row is missing.
    pub async fn asignar_investigador(
        &self,
        investigador_id: i64,
        semillero_id: i64,
    ) -> Result<(), DatabaseError> {
        if !self.semillero_existe(semillero_id).await? {
            return Err(DatabaseError::NotFound {
                entidad: "semillero",
                id: semillero_id,
            });
        }

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE investigadores SET semillero_id = ?1 WHERE id = ?2",
                libsql::params![semillero_id, investigador_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entidad: "investigador",
                id: investigador_id,
            });
        }
        Ok(())
    }

    /// All tutores system-wide, ordered by nombre.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_tutores(&self) -> Result<Vec<Investigador>, DatabaseError> {
        self.obtener_por_tipo(TipoInvestigador::Tutor).await
    }

    /// All estudiantes system-wide, ordered by nombre.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_estudiantes(&self) -> Result<Vec<Investigador>, DatabaseError> {
        self.obtener_por_tipo(TipoInvestigador::Estudiante).await
    }

    async fn obtener_por_tipo(
        &self,
        tipo: TipoInvestigador,
    ) -> Result<Vec<Investigador>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM investigadores WHERE tipo = ?1 ORDER BY nombre"
                ),
                [tipo.as_str()],
            )
            .await?;
        let mut investigadores = Vec::new();
        while let Some(row) = rows.next().await? {
            investigadores.push(row_to_investigador(&row)?);
        }
        Ok(investigadores)
    }

    /// Investigadores of one semillero, ordered by (tipo, nombre).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on query failure.
    pub async fn obtener_investigadores_por_semillero(
        &self,
        semillero_id: i64,
    ) -> Result<Vec<Investigador>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM investigadores
                     WHERE semillero_id = ?1
                     ORDER BY tipo, nombre"
                ),
                [semillero_id],
            )
            .await?;
        let mut investigadores = Vec::new();
        while let Some(row) = rows.next().await? {
            investigadores.push(row_to_investigador(&row)?);
        }
        Ok(investigadores)
    }
}
