//! API endpoint configuration
//!
//! # Environment Variables
//!
//! - `VOLTUP_ENV` - `development` or `production` (default: production)
//! - `VOLTUP_API_BASE_URL` - backend origin used in production; `/api` is
//!   appended when missing
//! - `VOLTUP_DEV_PROXY` - local proxy used in development
//!   (default: `http://127.0.0.1:5173/api`)

use std::str::FromStr;
use std::time::Duration;
use voltup_core::{Error, Result};

/// Dev proxy that forwards `/api` to the backend without CORS
pub const DEFAULT_DEV_PROXY: &str = "http://127.0.0.1:5173/api";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Which backend the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(Error::ConfigError(format!(
                "unknown environment '{}' (expected development or production)",
                other
            ))),
        }
    }
}

/// Resolved API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Base URL ending in `/api`, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build from `VOLTUP_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None)
    }

    /// Like [`from_env`](Self::from_env), with the environment forced
    /// (command-line override) instead of read from `VOLTUP_ENV`
    pub fn from_env_with(environment: Option<Environment>) -> Result<Self> {
        let environment = match environment {
            Some(env) => env,
            None => match std::env::var("VOLTUP_ENV") {
                Ok(v) if !v.trim().is_empty() => v.parse()?,
                _ => Environment::default(),
            },
        };
        let api_base = std::env::var("VOLTUP_API_BASE_URL").ok();
        let dev_proxy = std::env::var("VOLTUP_DEV_PROXY").ok();
        Ok(Self::resolve(environment, api_base.as_deref(), dev_proxy.as_deref()))
    }

    /// Development always goes through the proxy; production uses the
    /// configured backend and falls back to the proxy when none is set.
    pub fn resolve(environment: Environment, api_base: Option<&str>, dev_proxy: Option<&str>) -> Self {
        let proxy = dev_proxy
            .and_then(normalize_api_base)
            .unwrap_or_else(|| DEFAULT_DEV_PROXY.to_string());

        let base_url = match environment {
            Environment::Development => proxy,
            Environment::Production => api_base.and_then(normalize_api_base).unwrap_or(proxy),
        };

        Self {
            environment,
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Point at an explicit base URL (normalized the same way)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            environment: Environment::Production,
            base_url: normalize_api_base(base_url).unwrap_or_else(|| DEFAULT_DEV_PROXY.to_string()),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Trim, drop trailing slashes and make sure the URL ends in `/api`.
/// Blank input yields `None`.
pub fn normalize_api_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with("/api") {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}/api", trimmed))
    }
}
