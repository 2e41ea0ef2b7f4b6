use std::path::{Path, PathBuf};

use anyhow::Context;
use pset_auth::LocalAuth;
use pset_config::{PROJECT_DIR, PsetConfig};
use pset_db::service::PsetService;
use pset_import::ImportService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PsetService,
    pub auth: LocalAuth,
    pub config: PsetConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the database and session store for the discovered project root.
    pub async fn init(project_root: PathBuf, config: PsetConfig) -> anyhow::Result<Self> {
        let project_dir = project_root.join(PROJECT_DIR);

        let service = PsetService::from_config(&config.database, &project_dir)
            .await
            .with_context(|| {
                if config.database.is_remote() {
                    format!("failed to open remote database {}", config.database.url)
                } else {
                    format!(
                        "failed to open database {}",
                        config.database.local_path(&project_dir).display()
                    )
                }
            })?;
        tracing::debug!(remote = service.db().is_remote(), "database ready");

        let auth = LocalAuth::from_config(&config.auth, &project_dir);

        Ok(Self {
            service,
            auth,
            config,
            project_root,
        })
    }

    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.project_root.join(PROJECT_DIR)
    }

    /// Import service wired to this context's session provider and database.
    #[must_use]
    pub fn importer(&self) -> ImportService<&LocalAuth, &PsetService> {
        ImportService::new(&self.auth, &self.service, self.config.import.clone())
    }
}

/// Session provider for commands that run without a database (`pset auth`).
#[must_use]
pub fn local_auth(project_root: &Path, config: &PsetConfig) -> LocalAuth {
    LocalAuth::from_config(&config.auth, &project_root.join(PROJECT_DIR))
}
