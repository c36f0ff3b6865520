//! TMDB API configuration.
//!
//! The API key comes from the `TMDB_API_KEY` environment variable when set,
//! otherwise from a JSON file under the user config directory
//! (`{config_dir}/marquee/config.json`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable that overrides the config file.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in the environment and no config file
    #[error("no TMDB API key: set {API_KEY_ENV} or create {0}")]
    MissingApiKey(PathBuf),

    /// The user config directory could not be determined
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// Reading or writing the config file failed
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON
    #[error("config file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Connection settings for the TMDB API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// TMDB v3 API key
    pub api_key: String,
    /// API base URL, overridable for tests and proxies
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// ISO 639-1 language tag sent with every request
    #[serde(default = "default_language")]
    pub language: String,
}

impl TmdbConfig {
    /// Create a config with default base URL and language.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            language: default_language(),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Path of the config file under the user config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("marquee").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load configuration: environment first, config file second.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            if !api_key.is_empty() {
                debug!("using TMDB API key from environment");
                return Ok(Self::new(api_key));
            }
        }
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingApiKey(path.clone()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "loaded TMDB config");
        Ok(config)
    }

    /// Write this configuration to the default config path.
    ///
    /// Creates the parent directory if needed. Used by first-run setup of a
    /// consuming app.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write this configuration to a specific file.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_partial_file() {
        let config: TmdbConfig = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TmdbConfig::new("k")
            .with_base_url("http://localhost:1234")
            .with_language("de-DE");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.language, "de-DE");
    }

    #[test]
    fn test_missing_file_is_missing_api_key() {
        let path = PathBuf::from("/nonexistent/marquee/config.json");
        match TmdbConfig::load_from(&path) {
            Err(ConfigError::MissingApiKey(p)) => assert_eq!(p, path),
            other => panic!("expected MissingApiKey, got {:?}", other),
        }
    }
}
