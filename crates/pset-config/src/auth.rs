//! Session and sign-in configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the session file inside the project directory.
pub const DEFAULT_SESSION_FILE: &str = "session.json";

const fn default_allow_anonymous() -> bool {
    true
}

/// Thirty days.
const fn default_session_ttl_hours() -> u32 {
    720
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Whether a missing session may be replaced by an anonymous sign-in.
    #[serde(default = "default_allow_anonymous")]
    pub allow_anonymous: bool,

    /// Lifetime of newly created sessions, in hours.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,

    /// Session file override. Empty means `<project>/.pset/session.json`.
    #[serde(default)]
    pub session_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_anonymous: default_allow_anonymous(),
            session_ttl_hours: default_session_ttl_hours(),
            session_path: String::new(),
        }
    }
}

impl AuthConfig {
    /// Resolve the session file for a project directory (`.pset/`).
    #[must_use]
    pub fn session_file(&self, project_dir: &Path) -> PathBuf {
        if self.session_path.is_empty() {
            project_dir.join(DEFAULT_SESSION_FILE)
        } else {
            PathBuf::from(&self.session_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert!(config.allow_anonymous);
        assert_eq!(config.session_ttl_hours, 720);
        assert_eq!(
            config.session_file(Path::new(".pset")),
            PathBuf::from(".pset/session.json")
        );
    }

    #[test]
    fn session_path_override() {
        let config = AuthConfig {
            session_path: "/var/lib/pset/session.json".into(),
            ..Default::default()
        };
        assert_eq!(
            config.session_file(Path::new(".pset")),
            PathBuf::from("/var/lib/pset/session.json")
        );
    }
}
