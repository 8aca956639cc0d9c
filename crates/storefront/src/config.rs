//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the storefront locally.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static` (default: crates/storefront/static)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Directory with the stylesheet and other static files
    pub static_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced in Sentry
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let or_default =
            |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let host = parse_var("STOREFRONT_HOST", &or_default("STOREFRONT_HOST", DEFAULT_HOST))?;
        let port = parse_var("STOREFRONT_PORT", &or_default("STOREFRONT_PORT", DEFAULT_PORT))?;
        let base_url = parse_base_url(&or_default("STOREFRONT_BASE_URL", DEFAULT_BASE_URL))?;
        let static_dir = PathBuf::from(or_default("STOREFRONT_STATIC_DIR", DEFAULT_STATIC_DIR));

        let log_format = match get("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", get("SENTRY_SAMPLE_RATE"), 1.0)?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            get("SENTRY_TRACES_SAMPLE_RATE"),
            0.1,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            log_format,
            sentry_dsn: get("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable's value, naming the variable in the error.
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the public base URL; only http and https are accepted.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url: Url = parse_var("STOREFRONT_BASE_URL", value)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_BASE_URL".to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Parse an optional sample rate in `0.0..=1.0`.
fn parse_rate(key: &str, value: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let rate: f32 = parse_var(key, &value)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.static_dir, PathBuf::from("crates/storefront/static"));
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("STOREFRONT_HOST", "0.0.0.0"),
            ("STOREFRONT_PORT", "8080"),
            ("STOREFRONT_BASE_URL", "https://moon-flowers.ru"),
            ("LOG_FORMAT", "json"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.5"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.is_secure());
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example/1")
        );
        assert!((config.sentry_traces_sample_rate - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_sentry_dsn_is_disabled() {
        let config = config_with(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_with(&[("STOREFRONT_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        let err = config_with(&[("STOREFRONT_HOST", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "STOREFRONT_HOST"));
    }

    #[test]
    fn test_base_url_scheme_must_be_http() {
        let err = config_with(&[("STOREFRONT_BASE_URL", "ftp://moon-flowers.ru")]).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));

        assert!(config_with(&[("STOREFRONT_BASE_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        let err = config_with(&[("SENTRY_SAMPLE_RATE", "1.5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SENTRY_SAMPLE_RATE"));
    }
}
