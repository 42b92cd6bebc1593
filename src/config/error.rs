//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file path was never set
    #[error("Configuration file path not set")]
    #[allow(dead_code)]
    FilePathNotSet,

    /// Home directory could not be located
    #[error("Could not find home directory")]
    HomeDirectoryNotFound,

    /// Configuration directory could not be created
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be read
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Configuration file contents could not be parsed
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),
}
