//! Products service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PRODUCTS_MONGODB_URL` - MongoDB connection string (falls back to `MONGODB_URL`)
//!
//! ## Optional
//! - `PRODUCTS_MONGODB_DATABASE` - Database name (default: comptoir)
//! - `PRODUCTS_HOST` - Bind address (default: 127.0.0.1)
//! - `PRODUCTS_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Products service configuration.
#[derive(Debug, Clone)]
pub struct ProductsConfig {
    /// MongoDB connection URL (may contain credentials)
    pub mongodb_url: SecretString,
    /// MongoDB database name
    pub mongodb_database: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., production, staging)
    pub sentry_environment: Option<String>,
}

impl ProductsConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mongodb_url = get_mongodb_url("PRODUCTS_MONGODB_URL")?;
        let mongodb_database = get_env_or_default("PRODUCTS_MONGODB_DATABASE", "comptoir");
        let host = get_env_or_default("PRODUCTS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRODUCTS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PRODUCTS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRODUCTS_PORT".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            mongodb_url,
            mongodb_database,
            host,
            port,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get MongoDB URL with fallback to generic `MONGODB_URL`.
fn get_mongodb_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("MONGODB_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ProductsConfig {
            mongodb_url: SecretString::from("mongodb://localhost:27017"),
            mongodb_database: "comptoir".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("PRODUCTS_MONGODB_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: PRODUCTS_MONGODB_URL"
        );
    }
}
