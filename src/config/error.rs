//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("API base URL is required")]
    MissingBaseUrl,

    #[error("API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Request timeout must be positive")]
    InvalidTimeout,
}
