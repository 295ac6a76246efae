//! Error types for Horizon Reflow.
//!
//! The reflow engine itself never fails: operations on disposed containers,
//! missing attributes and oversized spans all degrade to no-ops or clipping.
//! Errors only surface while loading an [`EngineConfig`](crate::EngineConfig).

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for the expected schema.
    #[error("Failed to parse TOML config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration is not valid JSON for the expected schema.
    #[error("Failed to parse JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// The configuration parsed but violates a semantic rule.
    #[error("Invalid config field '{field}': {message}")]
    InvalidConfig { field: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
