//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Shared config container with interior mutability.
///
/// Cloning shares the same underlying config.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On failure the current config is kept and the error returned.
    pub fn reload(&self) -> Result<(), ConfigError> {
        self.reload_with(|_| {})
    }

    /// Reload config from the file, apply `overrides`, then validate.
    ///
    /// The merged result is what gets validated, so an override can fix a
    /// value the file gets wrong. On failure the current config is kept.
    pub fn reload_with<F: FnOnce(&mut Config)>(&self, overrides: F) -> Result<(), ConfigError> {
        let mut config = Config::parse_from(&self.path)?;
        overrides(&mut config);
        config.validate()?;
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
