//! Article storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use desk_core::seed::ARTICLES_KEY;

use crate::error::ConfigError;

fn default_key() -> String {
    ARTICLES_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the keyed JSON files. Empty means the platform data dir.
    #[serde(default)]
    pub dir: String,

    /// Key the article collection is persisted under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// The effective storage directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoStorageDir` when `dir` is empty and the platform
    /// has no data directory.
    pub fn resolved_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.dir.is_empty() {
            return Ok(PathBuf::from(&self.dir));
        }
        dirs::data_dir()
            .map(|p| p.join("newsdesk"))
            .ok_or(ConfigError::NoStorageDir)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or path-like key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.key.contains(['/', '\\']) || self.key.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".into(),
                reason: format!("'{}' is not a plain key name", self.key),
            });
        }
        Ok(())
    }
}
