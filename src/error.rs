/// Error types for catalog loading and configuration
///
/// Filter input problems are never errors (they fall back to default bounds),
/// so only the startup paths have error types.
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading the catalog document at startup
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid product \"{name}\": {reason}")]
    InvalidProduct { name: String, reason: String },
}

/// Failure while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
