//! Service layer orchestrating database operations.
//!
//! `SigiService` wraps `SigiDb` (raw database access). All repo methods are
//! implemented as `impl SigiService` blocks in the `repos` modules, so a
//! single handle exposes the full grupo/semillero/investigador/entregable
//! surface to the CLI.

use crate::SigiDb;
use crate::error::DatabaseError;

/// Orchestrates all SIGI database operations.
///
/// Validation runs before any write; multi-row writes (semillero plus its
/// investigadores) go through a single transaction with rollback on any
/// failure.
pub struct SigiService {
    db: SigiDb,
}

impl SigiService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for
    ///   tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SigiDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `SigiDb` (for testing).
    #[must_use]
    pub const fn from_db(db: SigiDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SigiDb {
        &self.db
    }
}
