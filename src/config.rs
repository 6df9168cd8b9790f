/// Application configuration
///
/// Settings are read once at startup from a TOML file in the user's
/// config directory:
/// - Linux: ~/.config/catalog-browser/config.toml
/// - macOS: ~/Library/Application Support/catalog-browser/config.toml
/// - Windows: %APPDATA%\catalog-browser\config.toml
///
/// Every field is optional; anything left out keeps its default.
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Catalog document to load at startup
    pub catalog_path: PathBuf,
    /// Suffix appended to every formatted price
    pub currency: String,
    /// Quiet period before a burst of resize events is applied
    pub resize_debounce_ms: u64,
    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
    /// Default tracing filter directive (RUST_LOG wins when set)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("products.json"),
            currency: "₽".to_string(),
            resize_debounce_ms: 200,
            window_width: 1024.0,
            window_height: 768.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the config from the default location.
    ///
    /// Returns `Ok(None)` when the config directory cannot be determined or
    /// the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("catalog-browser");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
