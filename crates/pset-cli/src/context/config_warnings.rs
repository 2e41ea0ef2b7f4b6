use pset_config::PsetConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PsetConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PsetConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.database.is_configured()
        && config.database.path.is_empty()
        && has_single_underscore_key(&env_keys, "PSET_DATABASE")
    {
        warnings.push(
            "Database config appears default while PSET_DATABASE* env vars exist. Use double underscores (example: PSET_DATABASE__URL)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "PSET_IMPORT") {
        warnings.push(
            "PSET_IMPORT_* env vars with a single underscore are ignored. Use double underscores (example: PSET_IMPORT__DEFAULT_USER_ID)."
                .to_string(),
        );
    }

    warnings
}

/// `PSET_SECTION_FIELD` instead of `PSET_SECTION__FIELD`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use pset_config::{DatabaseConfig, ImportConfig, PsetConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = PsetConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PSET_DATABASE_URL".to_string(), "libsql://demo".to_string()),
                ("PSET_IMPORT_DEFAULT_USER_ID".to_string(), "u-1".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("PSET_DATABASE__URL"));
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = PsetConfig {
            database: DatabaseConfig {
                url: "libsql://demo".to_string(),
                auth_token: "token".to_string(),
                ..Default::default()
            },
            import: ImportConfig {
                default_user_id: "u-1".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PSET_DATABASE__URL".to_string(), "libsql://demo".to_string()),
                ("PSET_IMPORT__DEFAULT_USER_ID".to_string(), "u-1".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn double_underscore_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &PsetConfig::default(),
            vec![(
                "PSET_IMPORT__MAX_PAYLOAD_BYTES".to_string(),
                "2048".to_string(),
            )],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn unrelated_env_is_ignored() {
        let warnings = collect_unconfigured_warnings(
            &PsetConfig::default(),
            vec![("PSET_LOG".to_string(), "debug".to_string())],
        );
        assert!(warnings.is_empty());
    }
}
