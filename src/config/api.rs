//! Workspace API configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigValidationError;

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the workspace service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the workspace service, e.g. `https://api.collabspace.dev`.
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.base_url.is_empty() {
            return Err(ConfigValidationError::MissingBaseUrl);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
