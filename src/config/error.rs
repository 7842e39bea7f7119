//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Font size for {field} must be positive, got {value}")]
    InvalidFontSize { field: &'static str, value: f32 },

    #[error("Logo width must be within (0, 8] inches, got {0}")]
    InvalidLogoWidth(f32),

    #[error("First-line indent must not be negative, got {0}")]
    InvalidIndent(f32),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
