//! Configuration error types

use super::file_config::ConfigValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading process or producer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Failed to read producer descriptor {}: {source}", .path.display())]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid producer descriptor {}: {source}", .path.display())]
    ParseDescriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}
