//! Tests for the configuration module.

use crate::config::{ConfigLoader, LogConfig, OleloConfig, SuggestConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::test_utils::{create_test_dir, write_test_file};

#[test]
fn default_config_is_valid() {
    let config = OleloConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.suggest.limit, 5);
    assert_eq!(config.log.level, "info");
}

#[test]
fn zero_suggestion_limit_is_rejected() {
    let config = SuggestConfig { limit: 0 };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn invalid_log_level_is_rejected() {
    let config = LogConfig {
        level: "verbose".to_string(),
        json: false,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn loader_reads_toml_file() {
    let dir = create_test_dir().expect("temp dir");
    let path = write_test_file(
        &dir,
        "olelo.toml",
        r#"
[seed]
path = "vocab/list.txt"

[suggest]
limit = 3

[log]
level = "debug"
json = true
"#,
    )
    .expect("config file");

    let config = ConfigLoader::new(Some(&path), "OLELO_TEST")
        .load()
        .expect("config loads");
    assert_eq!(config.seed.path.to_str(), Some("vocab/list.txt"));
    assert_eq!(config.suggest.limit, 3);
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
}

#[test]
fn loader_keeps_defaults_for_partial_file() {
    let dir = create_test_dir().expect("temp dir");
    let path = write_test_file(&dir, "olelo.toml", "[suggest]\nlimit = 9\n").expect("config file");

    let config = ConfigLoader::new(Some(&path), "OLELO_TEST")
        .load()
        .expect("config loads");
    assert_eq!(config.suggest.limit, 9);
    assert_eq!(config.log.level, "info");
}

#[test]
fn loader_applies_env_var_overrides() {
    let dir = create_test_dir().expect("temp dir");
    let path = write_test_file(&dir, "olelo.toml", "[suggest]\nlimit = 9\n").expect("config file");

    // Set environment variables with a unique prefix; the variable name is
    // the prefix plus "__"-separated section and key.
    std::env::set_var("OLELO_ENV__SUGGEST__LIMIT", "7");
    std::env::set_var("OLELO_ENV__LOG__LEVEL", "warn");

    let config = ConfigLoader::new(Some(&path), "OLELO_ENV")
        .load()
        .expect("config loads");

    // Environment variables take precedence over the file
    assert_eq!(config.suggest.limit, 7);
    assert_eq!(config.log.level, "warn");

    // Clean up environment variables
    std::env::remove_var("OLELO_ENV__SUGGEST__LIMIT");
    std::env::remove_var("OLELO_ENV__LOG__LEVEL");
}

#[test]
fn loader_reports_missing_file() {
    let dir = create_test_dir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let result = ConfigLoader::new(Some(&missing), "OLELO_TEST").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn loader_rejects_invalid_values_in_file() {
    let dir = create_test_dir().expect("temp dir");
    let path =
        write_test_file(&dir, "olelo.toml", "[log]\nlevel = \"loud\"\n").expect("config file");

    let result = ConfigLoader::new(Some(&path), "OLELO_TEST").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}
