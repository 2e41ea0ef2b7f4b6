use figment::Jail;
use pset_config::PsetConfig;

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("PSET_DATABASE__URL", "libsql://env.turso.io");
        jail.set_env("PSET_DATABASE__AUTH_TOKEN", "env-token");
        jail.set_env("PSET_AUTH__ALLOW_ANONYMOUS", "false");
        jail.set_env("PSET_GENERAL__DEFAULT_LIMIT", "5");

        let config = PsetConfig::load(None).expect("config loads");
        assert_eq!(config.database.url, "libsql://env.turso.io");
        assert!(config.database.is_remote());
        assert!(!config.auth.allow_anonymous);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".pset")?;
        jail.create_file(
            ".pset/config.toml",
            r#"
[import]
default_title = "From toml"
"#,
        )?;
        jail.set_env("PSET_IMPORT__DEFAULT_TITLE", "From env");

        let config = PsetConfig::load(None).expect("config loads");
        assert_eq!(config.import.default_title, "From env");
        Ok(())
    });
}

#[test]
fn single_underscore_typo_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("PSET_DATABASE_URL", "libsql://typo.turso.io");

        let config = PsetConfig::load(None).expect("config loads");
        assert!(config.database.url.is_empty());
        Ok(())
    });
}
