//! DuckDB storage service
//!
//! Holds the single database connection for the server. The search engine
//! never touches this module directly: it builds a [`FileCollection`] and
//! the repository executes it here.

pub mod collection;
pub mod error;
mod migrations;
pub mod models;
pub mod repositories;
mod schema;

pub use collection::{FileCollection, SqlParams};
pub use error::DuckdbError;
pub use models::FileRecordRow;

use std::path::PathBuf;

use duckdb::Connection;
use parking_lot::{Mutex, MutexGuard};

/// DuckDB storage service
///
/// Uses a single shared connection protected by a mutex.
pub struct DuckdbService {
    conn: Mutex<Option<Connection>>,
}

impl Drop for DuckdbService {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.get_mut().take() {
            // Best-effort close - log but don't panic on error
            if let Err((_, e)) = conn.close() {
                tracing::warn!("DuckDB connection close failed during drop: {}", e);
            }
        }
    }
}

impl DuckdbService {
    /// Open (or create) the database file and bring the schema up to date
    pub async fn init(db_path: PathBuf) -> Result<Self, DuckdbError> {
        let conn = tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            migrations::run_migrations(&conn)?;
            tracing::debug!(path = %db_path.display(), "DuckdbService initialized");
            Ok::<_, DuckdbError>(conn)
        })
        .await
        .map_err(|e| DuckdbError::Io(std::io::Error::other(e)))??;

        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// In-memory database with the schema applied (tests and local tooling)
    pub fn open_in_memory() -> Result<Self, DuckdbError> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Close the connection explicitly so pending data is flushed to disk
    pub fn close(&self) {
        if let Some(conn) = self.conn.lock().take() {
            if let Err((_, e)) = conn.close() {
                tracing::warn!("DuckDB connection close failed: {}", e);
            }
        }
    }

    /// Get exclusive access to the connection.
    ///
    /// # Panics
    /// Panics if the connection has been closed.
    pub fn conn(&self) -> parking_lot::MappedMutexGuard<'_, Connection> {
        MutexGuard::map(self.conn.lock(), |opt| {
            opt.as_mut()
                .expect("DuckDB connection already closed - do not call conn() after close()")
        })
    }
}

/// Run `f` inside a transaction, rolling back on error
pub fn in_transaction<T>(
    conn: &Connection,
    f: impl FnOnce(&Connection) -> Result<T, DuckdbError>,
) -> Result<T, DuckdbError> {
    conn.execute_batch("BEGIN TRANSACTION")?;
    match f(conn) {
        Ok(value) => {
            conn.execute_batch("COMMIT")?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = conn.execute_batch("ROLLBACK") {
                tracing::warn!("Rollback failed after error: {}", rollback_err);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_creates_database_file_and_close_flushes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.duckdb");
        let service = DuckdbService::init(path.clone()).await.unwrap();
        service.close();
        assert!(path.exists());
    }

    #[test]
    fn open_in_memory_applies_schema() {
        let service = DuckdbService::open_in_memory().unwrap();
        let count: i64 = service
            .conn()
            .query_row("SELECT COUNT(*) FROM file_record", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
