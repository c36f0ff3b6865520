//! Config loading precedence tests.
//!
//! Env-var tests are serialized: `TMDB_API_KEY` is process-global state.

use marquee::config::{ConfigError, TmdbConfig, API_KEY_ENV};
use serial_test::serial;

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marquee").join("config.json");

    let config = TmdbConfig::new("file-key").with_language("fr-FR");
    config.save_to(&path).unwrap();

    let loaded = TmdbConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        TmdbConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
#[serial]
fn env_var_takes_precedence() {
    std::env::set_var(API_KEY_ENV, "env-key");
    let config = TmdbConfig::load().unwrap();
    std::env::remove_var(API_KEY_ENV);

    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.base_url, "https://api.themoviedb.org/3");
}

#[test]
#[serial]
fn empty_env_var_falls_through() {
    std::env::set_var(API_KEY_ENV, "");
    let result = TmdbConfig::load();
    std::env::remove_var(API_KEY_ENV);

    // Without a config file present this is MissingApiKey; with one it loads
    // from disk. Either way the empty env value must not win.
    if let Ok(config) = result {
        assert!(!config.api_key.is_empty());
    }
}
