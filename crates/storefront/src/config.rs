//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `TEAHOUSE_HOST` - Bind address (default: 127.0.0.1)
//! - `TEAHOUSE_PORT` - Listen port (default: 3000)
//! - `TEAHOUSE_PROFILE_PATH` - Profile file holding the cart (default: data/profile.json)
//! - `TEAHOUSE_CART_KEY` - Key the cart is stored under (default: cart)
//! - `TEAHOUSE_MENU_PATH` - Menu catalog (default: crates/storefront/content/menu.json)
//! - `TEAHOUSE_STATIC_DIR` - Static assets (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::CART_KEY;

pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";
pub const DEFAULT_MENU_PATH: &str = "crates/storefront/content/menu.json";
pub const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the shopper profile (and so the cart) is persisted
    pub profile_path: PathBuf,
    /// Key of the cart entry inside the profile
    pub cart_key: String,
    /// Menu catalog file
    pub menu_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = or_default("TEAHOUSE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TEAHOUSE_HOST".to_string(), e.to_string()))?;
        let port = or_default("TEAHOUSE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TEAHOUSE_PORT".to_string(), e.to_string()))?;

        let cart_key = or_default("TEAHOUSE_CART_KEY", CART_KEY);
        if cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TEAHOUSE_CART_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            profile_path: or_default("TEAHOUSE_PROFILE_PATH", DEFAULT_PROFILE_PATH).into(),
            cart_key,
            menu_path: or_default("TEAHOUSE_MENU_PATH", DEFAULT_MENU_PATH).into(),
            static_dir: or_default("TEAHOUSE_STATIC_DIR", DEFAULT_STATIC_DIR).into(),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.profile_path, PathBuf::from(DEFAULT_PROFILE_PATH));
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.menu_path, PathBuf::from(DEFAULT_MENU_PATH));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TEAHOUSE_HOST", "0.0.0.0"),
            ("TEAHOUSE_PORT", "8080"),
            ("TEAHOUSE_PROFILE_PATH", "/tmp/p.json"),
            ("TEAHOUSE_CART_KEY", "basket"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.profile_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.cart_key, "basket");
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("TEAHOUSE_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "TEAHOUSE_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(config_from(&[("TEAHOUSE_HOST", "localhost:80")]).is_err());
    }

    #[test]
    fn test_empty_cart_key() {
        assert!(config_from(&[("TEAHOUSE_CART_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_empty_sentry_dsn_is_none() {
        let config = config_from(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
