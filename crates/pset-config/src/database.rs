//! libSQL database configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the local database inside the project directory.
pub const DEFAULT_DB_FILE: &str = "pset.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Remote database URL (e.g., `libsql://mydb.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file. Empty means `<project>/.pset/pset.db`.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Check if the remote connection has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Whether commands should talk to the remote database.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.is_configured()
    }

    /// Resolve the local database file for a project directory (`.pset/`).
    #[must_use]
    pub fn local_path(&self, project_dir: &Path) -> PathBuf {
        if self.path.is_empty() {
            project_dir.join(DEFAULT_DB_FILE)
        } else {
            PathBuf::from(&self.path)
        }
    }
}
