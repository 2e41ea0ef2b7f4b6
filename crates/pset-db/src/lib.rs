//! # pset-db
//!
//! libSQL storage for pset: the `tasks` and `problems` collections.
//!
//! Works against a local database file (or `:memory:` in tests) or a remote
//! libSQL server (Turso). Queries against a remote server are retried on
//! transient infrastructure errors.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;
use retry::RetryConfig;

/// Central database handle.
///
/// Wraps a libSQL database and connection. Provides ID generation and the
/// retrying `execute` / `query` entry points every repository goes through.
pub struct PsetDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
    retry: RetryConfig,
}

impl PsetDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "opened local database");
        Self::init(db, conn, false, RetryConfig::none()).await
    }

    /// Open a remote libSQL database (e.g. `libsql://mydb.turso.io`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "opened remote database");
        Self::init(db, conn, true, RetryConfig::default()).await
    }

    async fn init(
        db: libsql::Database,
        conn: libsql::Connection,
        remote: bool,
        retry: RetryConfig,
    ) -> Result<Self, DatabaseError> {
        // Foreign keys are per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let pset_db = Self {
            db,
            conn,
            remote,
            retry,
        };
        pset_db.run_migrations().await?;
        Ok(pset_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote server.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Execute a statement, retrying transient remote errors.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the last error seen.
    pub async fn execute(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<u64, DatabaseError> {
        let affected = retry::with_retry(&self.retry, || {
            self.conn
                .execute(sql, libsql::params_from_iter(params.clone()))
        })
        .await?;
        Ok(affected)
    }

    /// Run a query, retrying transient remote errors.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the last error seen.
    pub async fn query(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<libsql::Rows, DatabaseError> {
        let rows = retry::with_retry(&self.retry, || {
            self.conn.query(sql, libsql::params_from_iter(params.clone()))
        })
        .await?;
        Ok(rows)
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tsk-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .query(
                "SELECT ?1 || '-' || lower(hex(randomblob(4)))",
                vec![prefix.into()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> PsetDb {
        PsetDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        assert!(!db.is_remote());

        for table in ["tasks", "problems"] {
            let mut rows = db
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    vec![table.into()],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("tsk").await.unwrap();
        assert!(id.starts_with("tsk-"), "ID should start with 'tsk-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in pset_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("prb").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn status_check_constraint() {
        let db = test_db().await;
        let result = db
            .execute(
                "INSERT INTO tasks (id, task_id, title, user_id, status) VALUES ('tsk-1', 'task_1', 't', 'u', 'open')",
                vec![],
            )
            .await;
        assert!(result.is_err(), "unknown status should be rejected");
    }

    #[tokio::test]
    async fn problems_require_existing_task() {
        let db = test_db().await;
        let result = db
            .execute(
                "INSERT INTO problems (id, task_id, problem_key, content) VALUES ('prb-1', 'task_missing', 'content1', 'x')",
                vec![],
            )
            .await;
        assert!(result.is_err(), "foreign key should be enforced");
    }
}
