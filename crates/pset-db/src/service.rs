//! Service layer over `PsetDb`.
//!
//! `PsetService` owns the database handle. Repository methods for tasks and
//! problems are implemented as `impl PsetService` blocks under `repos/`.

use pset_config::DatabaseConfig;
use std::path::Path;

use crate::PsetDb;
use crate::error::DatabaseError;

pub struct PsetService {
    db: PsetDb,
}

impl PsetService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: PsetDb::open_local(db_path).await?,
        })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: PsetDb::open_remote(url, auth_token).await?,
        })
    }

    /// Open whichever database the `database` config section selects: remote
    /// when URL and token are set, otherwise the local file under `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the selected database cannot be opened.
    pub async fn from_config(
        config: &DatabaseConfig,
        project_dir: &Path,
    ) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            return Self::new_remote(&config.url, &config.auth_token).await;
        }
        let path = config.local_path(project_dir);
        let path = path.to_str().ok_or_else(|| {
            DatabaseError::InvalidState(format!(
                "database path is not valid UTF-8: {}",
                path.display()
            ))
        })?;
        Self::new_local(path).await
    }

    /// Wrap an existing `PsetDb`.
    #[must_use]
    pub const fn from_db(db: PsetDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PsetDb {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn from_config_opens_local_file_under_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::default();
        let svc = PsetService::from_config(&config, dir.path()).await.unwrap();
        assert!(!svc.db().is_remote());
        assert!(dir.path().join(pset_config::DEFAULT_DB_FILE).exists());
    }
}
