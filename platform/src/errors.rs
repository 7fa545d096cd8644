//! Error types for the platform simulator

use thiserror::Error;

/// Main error type for the platform simulator
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Shutdown error: {0}")]
    ShutdownError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlatformError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        PlatformError::NotFound(format!("{} '{}'", kind, id))
    }
}

impl From<anyhow::Error> for PlatformError {
    fn from(err: anyhow::Error) -> Self {
        PlatformError::Internal(err.to_string())
    }
}
