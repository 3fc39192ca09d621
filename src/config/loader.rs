use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `sectionfeed/config.toml` under `dirs::config_dir()`, or the current
    /// directory when no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sectionfeed").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path` and validates it.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses `path` without validating.
    ///
    /// Callers that layer overrides on top (CLI flags) validate the merged
    /// result themselves.
    pub fn parse_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `feed.url` is an absolute URL
    /// - `ui.tick_rate_ms` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = Url::parse(&self.feed.url) {
            return Err(ConfigError::ValidationError {
                message: format!("Feed URL '{}' is invalid: {}", self.feed.url, e),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
