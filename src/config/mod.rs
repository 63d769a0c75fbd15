//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `COLLABSPACE` prefix and nested values use `__` as separator, e.g.
//! `COLLABSPACE__API__BASE_URL`.

mod api;
mod error;

pub use api::ApiConfig;
pub use error::{ConfigError, ConfigValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Workspace service API settings.
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one is present (for development).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("COLLABSPACE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.api.validate()
    }
}
