//! Configuration settings structures for courier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "courier-rs".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_channel_base_url() -> String {
    "http://notification-service:5001".to_string()
}

fn default_channel_timeout() -> u64 {
    10
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Auth Configuration
// ============================================================================

/// Static bearer-token authentication configuration
///
/// Every `/api` route compares the request's bearer token against this
/// value. The token should come from the environment in production
/// (`COURIER_AUTH__TOKEN`), not from a committed file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The expected bearer token
    #[serde(default)]
    pub token: String,
}

// ============================================================================
// Channel Service Configuration
// ============================================================================

/// External notification delivery service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelServiceConfig {
    /// Base URL of the delivery service
    #[serde(default = "default_channel_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_channel_timeout")]
    pub timeout_seconds: u64,
}

impl ChannelServiceConfig {
    /// The per-call timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ChannelServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_channel_base_url(),
            timeout_seconds: default_channel_timeout(),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Root settings structure aggregating all configuration sections
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub channels: ChannelServiceConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validates the loaded settings.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a zero port, an empty auth token, an
    /// unparseable channel-service URL, or a zero channel timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port must not be 0"));
        }

        if self.auth.token.is_empty() {
            return Err(ConfigError::validation(
                "auth.token must be set (COURIER_AUTH__TOKEN)",
            ));
        }

        let url = reqwest::Url::parse(&self.channels.base_url).map_err(|e| {
            ConfigError::validation(format!(
                "channels.base_url is not a valid URL: {}",
                e
            ))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::validation(
                "channels.base_url must use http or https",
            ));
        }

        if self.channels.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "channels.timeout_seconds must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            auth: AuthConfig {
                token: "secret".to_string(),
            },
            ..Settings::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "courier-rs");
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.channels.base_url, "http://notification-service:5001");
        assert_eq!(settings.channels.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validate_accepts_valid_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let settings = Settings::default();
        let error = settings.validate().unwrap_err();
        assert!(error.to_string().contains("auth.token"));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = valid_settings();
        settings.channels.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        settings.channels.base_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = valid_settings();
        settings.channels.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }
}
