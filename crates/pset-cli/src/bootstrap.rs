use std::path::{Path, PathBuf};

use anyhow::Context;
use pset_config::{PROJECT_DIR, PsetConfig};

use crate::context;

/// Resolve the project root from `--project` or by walking up from the
/// current directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        return resolve_explicit(Path::new(path));
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not a pset project (no .pset directory found). Run 'pset init' first.")
}

fn resolve_explicit(explicit: &Path) -> anyhow::Result<PathBuf> {
    if explicit
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == PROJECT_DIR)
    {
        return explicit
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.pset' directory has no parent");
    }

    if explicit.is_dir() {
        return Ok(explicit.to_path_buf());
    }

    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        explicit.display()
    );
}

/// Load `.env` and layered config for the project, or for the current
/// directory when there is none.
pub fn load_config(project_root: Option<&Path>) -> anyhow::Result<PsetConfig> {
    let config = PsetConfig::load_with_dotenv(project_root).context("failed to load configuration")?;
    tracing::debug!(
        root = ?project_root,
        remote = config.database.is_remote(),
        allow_anonymous = config.auth.allow_anonymous,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::resolve_project_root;

    #[test]
    fn explicit_pset_dir_resolves_to_parent() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let pset_dir = temp.path().join(".pset");
        std::fs::create_dir(&pset_dir).expect(".pset should create");

        let root = resolve_project_root(Some(&pset_dir.display().to_string()))
            .expect("root should resolve");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn explicit_missing_dir_is_rejected() {
        let err = resolve_project_root(Some("/nonexistent/project"))
            .expect_err("missing dir should fail");
        assert!(err.to_string().contains("does not exist"));
    }
}
