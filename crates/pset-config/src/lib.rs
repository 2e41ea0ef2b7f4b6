//! # pset-config
//!
//! Layered configuration loading for pset using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PSET_*` prefix, `__` as separator)
//! 2. Project-level `.pset/config.toml`
//! 3. User-level `~/.config/pset/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PSET_DATABASE__URL` -> `database.url`,
//! `PSET_AUTH__ALLOW_ANONYMOUS` -> `auth.allow_anonymous`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pset_config::PsetConfig;
//!
//! let config = PsetConfig::load_with_dotenv(None).expect("config");
//!
//! if config.database.is_remote() {
//!     println!("Remote database: {}", config.database.url);
//! }
//! ```

mod auth;
mod database;
mod error;
mod general;
mod import;

pub use auth::{AuthConfig, DEFAULT_SESSION_FILE};
pub use database::{DEFAULT_DB_FILE, DatabaseConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use import::ImportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of every environment variable read by the config layer.
pub const ENV_PREFIX: &str = "PSET_";

/// Name of the per-project directory holding config, database, and session.
pub const PROJECT_DIR: &str = ".pset";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PsetConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PsetConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    /// `project_root` is the directory containing `.pset/`; `None` means the
    /// current directory.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the project root (or the
    /// current directory when no root is known).
    pub fn load_with_dotenv(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv(project_root);
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::local_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the project-level config file.
    #[must_use]
    pub fn local_config_path(project_root: Option<&Path>) -> PathBuf {
        project_root
            .map_or_else(PathBuf::new, Path::to_path_buf)
            .join(PROJECT_DIR)
            .join("config.toml")
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pset").join("config.toml"))
    }

    /// Reject values that deserialize fine but cannot work.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.session_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.import.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "import.max_payload_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn load_dotenv(project_root: Option<&Path>) {
        if let Some(root) = project_root {
            let env_path = root.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
        }
        let _ = dotenvy::dotenv();
    }
}
