//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::api::ApiError;
pub use crate::config::ConfigError;
pub use crate::state::PayloadError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rick and Morty API-related errors
    #[error("API error: {0}")]
    #[allow(dead_code)]
    Api(#[from] ApiError),

    /// Navigation payload errors
    #[error("Navigation payload error: {0}")]
    #[allow(dead_code)]
    Payload(#[from] PayloadError),

    /// I/O errors
    #[error("I/O error: {0}")]
    #[allow(dead_code)]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
