//! # sigi-db
//!
//! libSQL database operations for SIGI academic records.
//!
//! Handles all relational state: grupos de investigación, semilleros,
//! investigadores, and entregables. Repository methods are implemented as
//! `impl SigiService` blocks in the `repos` modules, one per entity.
//!
//! Uses the `libsql` crate (C `SQLite` fork) with a local database file, or
//! `":memory:"` for tests.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all SIGI state operations.
///
/// Wraps a libSQL database and connection. Repository methods reach it
/// through [`service::SigiService`].
pub struct SigiDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SigiDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let sigi_db = Self { db, conn };
        sigi_db.run_migrations().await?;
        Ok(sigi_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> SigiDb {
        SigiDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "grupos_investigacion",
            "semilleros",
            "investigadores",
            "entregables",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;

        // No grupo with id 999 exists
        let result = db
            .conn()
            .execute(
                "INSERT INTO semilleros (nombre, objetivo_principal, grupo_id) VALUES ('X', 'Y', 999)",
                (),
            )
            .await;
        assert!(result.is_err(), "FK violation should be rejected");
    }

    #[tokio::test]
    async fn entregable_semillero_is_unique() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO grupos_investigacion (nombre) VALUES ('G')",
                (),
            )
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO semilleros (nombre, objetivo_principal, grupo_id) VALUES ('S', 'O', 1)",
                (),
            )
            .await
            .unwrap();

        db.conn()
            .execute(
                "INSERT INTO entregables (titulo, tipo, semillero_id, fecha_entrega) VALUES ('E1', 'informe', 1, '2026-01-01')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO entregables (titulo, tipo, semillero_id, fecha_entrega) VALUES ('E2', 'informe', 1, '2026-01-02')",
                (),
            )
            .await;
        assert!(result.is_err(), "second entregable for a semillero should be rejected");
    }

    #[tokio::test]
    async fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigi.db");
        let path = path.to_str().unwrap();

        {
            let db = SigiDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO grupos_investigacion (nombre) VALUES ('Persistente')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = SigiDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT nombre FROM grupos_investigacion", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Persistente");
    }

    #[tokio::test]
    async fn estado_check_constraint() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO grupos_investigacion (nombre) VALUES ('G')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO semilleros (nombre, objetivo_principal, grupo_id, status) VALUES ('S', 'O', 1, 'bogus')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown status should violate CHECK");
    }
}
