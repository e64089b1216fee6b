//! Integration tests for configuration loading.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use dataset_explorer::{initialize, Config, ExplorerError};

#[test]
fn reads_every_key_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
base_url = "https://uvlhub.example"
csrf_token = "abc"
download_dir = "/srv/archives"
request_timeout_secs = 5
trace_level = "debug"
log_file = "/var/log/explorer.log"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.base_url, "https://uvlhub.example");
    assert_eq!(config.csrf_token, "abc");
    assert_eq!(config.download_dir, PathBuf::from("/srv/archives"));
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.trace_level, "debug");
    assert_eq!(config.log_file, Some(PathBuf::from("/var/log/explorer.log")));
    assert_eq!(initialize(&config).csrf_token, "abc");
}

#[test]
fn missing_keys_take_defaults() {
    let config = Config::from_toml_str("").unwrap();
    let defaults = Config::default();

    assert_eq!(config.base_url, defaults.base_url);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.trace_level, "info");
    assert!(config.log_file.is_none());
}

#[test]
fn invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "request_timeout_secs = \"soon\"").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ExplorerError::Config(ref message) if message.contains("config.toml")));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, ExplorerError::Config(_)));
}

#[test]
fn environment_overrides_file_values() {
    let mut config = Config::from_toml_str("base_url = \"http://file\"\ntrace_level = \"warn\"").unwrap();
    let env: HashMap<&str, &str> = HashMap::from([
        ("DATASET_EXPLORER_BASE_URL", "http://env"),
        ("DATASET_EXPLORER_CSRF_TOKEN", "from-env"),
        ("DATASET_EXPLORER_TRACE_LEVEL", "  "),
    ]);

    config.apply_env_from(|key| env.get(key).map(|value| (*value).to_string()));

    assert_eq!(config.base_url, "http://env");
    assert_eq!(config.csrf_token, "from-env");
    assert_eq!(config.trace_level, "warn");
}

#[test]
fn relative_log_file_lands_in_data_dir() {
    let config = Config::from_toml_str("log_file = \"explorer.log\"").unwrap();
    assert_eq!(
        config.log_file,
        Some(dataset_explorer::infrastructure::data_dir().join("explorer.log"))
    );

    let config = Config::from_toml_str("log_file = \"/tmp/explorer.log\"").unwrap();
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/explorer.log")));
}
