//! Configuration management for the Scalenty site state layer
//!
//! Holds the statically configured feature flags the state layer consults
//! (cookie banner, analytics) and the locations of the durable stores.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.scalenty.Site";

/// File name of the configuration file inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// File name of the durable preference store inside the data directory
pub const STORAGE_FILE: &str = "preferences.json";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Whether the cookie consent banner may be shown at all
    pub cookie_banner_enabled: bool,

    /// Whether analytics events may be dispatched (still gated by consent)
    pub analytics_enabled: bool,

    /// Override for the preference store location
    pub storage_file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cookie_banner_enabled: true,
            analytics_enabled: true,
            storage_file: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the config directory or return defaults
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Resolve where the preference store lives
    pub fn storage_path(&self) -> ConfigResult<PathBuf> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => Self::data_dir().map(|p| p.join(STORAGE_FILE)),
        }
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Get the data directory path (for the preference store)
    pub fn data_dir() -> ConfigResult<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }
}
