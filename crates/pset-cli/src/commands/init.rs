use std::path::{Path, PathBuf};

use anyhow::Context;
use pset_config::{PROJECT_DIR, PsetConfig};
use pset_db::service::PsetService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# pset project configuration.
# Environment variables override these values: PSET_<SECTION>__<KEY>.

[database]
# Remote libSQL database; leave empty to use .pset/pset.db.
# url = "libsql://example.turso.io"
# auth_token = ""

[auth]
allow_anonymous = true
session_ttl_hours = 720

[import]
default_title = "Math problem set"
# default_user_id = ""
max_payload_bytes = 1048576

[general]
default_limit = 20
"#;

#[derive(Serialize)]
struct InitResponse {
    project_root: String,
    config_path: String,
    config_written: bool,
    database: String,
}

/// Handle `pset init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let project_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config_path = PsetConfig::local_config_path(Some(&root));
    let config_written = write_config(&config_path, args.force)?;

    let config = PsetConfig::load_with_dotenv(Some(&root)).context("failed to load configuration")?;
    let service = PsetService::from_config(&config.database, &project_dir)
        .await
        .context("failed to initialize database")?;
    let database = if service.db().is_remote() {
        config.database.url.clone()
    } else {
        config.database.local_path(&project_dir).display().to_string()
    };
    tracing::info!(root = %root.display(), "initialized pset project");

    output(
        &InitResponse {
            project_root: root.display().to_string(),
            config_path: config_path.display().to_string(),
            config_written,
            database,
        },
        flags.format,
    )
}

/// Write the config template unless a config exists and `force` is off.
fn write_config(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    std::fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
