//! Configuration error types.

use thiserror::Error;

/// Errors raised while locating, parsing, or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration file is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be parsed or deserialized
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// An environment variable held an unusable value
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// Two configuration sources were set that cannot be combined
    #[error("{0}")]
    MutualExclusivityError(String),
}

impl ConfigError {
    pub fn file_not_found(message: impl Into<String>) -> Self {
        ConfigError::FileNotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ConfigError::ValidationError(message.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::ParseError(error.to_string())
    }
}
