//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEETING_MINUTES` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use meeting_minutes::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing minutes to {}", config.output.directory.display());
//! ```

mod error;
mod logging;
mod output;
mod render;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use render::RenderConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Theme and rendering defaults
    #[serde(default)]
    pub render: RenderConfig,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEETING_MINUTES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEETING_MINUTES__RENDER__FONT_FAMILY=Arial` -> `render.font_family = "Arial"`
    /// - `MEETING_MINUTES__OUTPUT__DIRECTORY=out` -> `output.directory = "out"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEETING_MINUTES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.render.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
