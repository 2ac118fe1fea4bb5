//! Admin configuration
//!
//! Read from the environment (a `.env` file is loaded first by the
//! binary). Every key has a default so the front end starts against a
//! local API without any setup.

use std::time::Duration;

use utilisateurs_client::ClientConfig;
use utilisateurs_client::config::DEFAULT_API_URL;

use crate::error::{AdminError, AdminResult};

/// Delay before a form whose record failed to load returns to its list
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// API root (UTILISATEURS_API_URL)
    pub api_url: String,
    /// Request timeout in seconds, unset keeps the transport default
    /// (UTILISATEURS_HTTP_TIMEOUT_SECS)
    pub http_timeout_secs: Option<u64>,
    /// UTILISATEURS_REDIRECT_DELAY_MS
    pub redirect_delay: Duration,
    /// LOG_LEVEL, overridden by RUST_LOG
    pub log_level: String,
    /// LOG_JSON
    pub log_json: bool,
    /// LOG_DIR, console only when unset
    pub log_dir: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout_secs: None,
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
        }
    }
}

impl AdminConfig {
    pub fn from_env() -> AdminResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> AdminResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            api_url: lookup("UTILISATEURS_API_URL").unwrap_or(defaults.api_url),
            http_timeout_secs: lookup("UTILISATEURS_HTTP_TIMEOUT_SECS")
                .map(|v| parse_number("UTILISATEURS_HTTP_TIMEOUT_SECS", &v))
                .transpose()?,
            redirect_delay: lookup("UTILISATEURS_REDIRECT_DELAY_MS")
                .map(|v| parse_number("UTILISATEURS_REDIRECT_DELAY_MS", &v))
                .transpose()?
                .map(Duration::from_millis)
                .unwrap_or(defaults.redirect_delay),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone());
        match self.http_timeout_secs {
            Some(seconds) => config.with_timeout(seconds),
            None => config,
        }
    }
}

fn parse_number(key: &str, value: &str) -> AdminResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| AdminError::Config(format!("{} must be a number, got '{}'", key, value)))
}
