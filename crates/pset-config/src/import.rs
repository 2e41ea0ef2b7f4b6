//! Payload import configuration.

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Math problem set".to_string()
}

/// One mebibyte.
const fn default_max_payload_bytes() -> u64 {
    1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    /// Title prefix used when an import does not name its task.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// User to import for when neither the command nor the session supply one.
    #[serde(default)]
    pub default_user_id: String,

    /// Payloads larger than this are rejected before parsing.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            default_user_id: String::new(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl ImportConfig {
    /// `"<default title> (<count> problems)"`.
    #[must_use]
    pub fn title_for(&self, count: usize) -> String {
        format!("{} ({count} problems)", self.default_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ImportConfig::default();
        assert_eq!(config.default_title, "Math problem set");
        assert!(config.default_user_id.is_empty());
        assert_eq!(config.max_payload_bytes, 1_048_576);
    }

    #[test]
    fn generated_title_counts_problems() {
        let config = ImportConfig::default();
        assert_eq!(config.title_for(3), "Math problem set (3 problems)");
    }
}
