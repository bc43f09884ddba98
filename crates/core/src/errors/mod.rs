//! Error types and Result alias for the VoltUp client

mod messages;

pub use messages::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error body returned by the backend on a rejected request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Read `{ code, message }` from a raw error body. Each field is taken on
    /// its own: a numeric code or a missing message never loses the other.
    pub fn from_json(text: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(text) else {
            return Self::default();
        };
        Self {
            code: field_text(&value, "code"),
            message: field_text(&value, "message"),
        }
    }
}

fn field_text(value: &Value, field: &str) -> Option<String> {
    let text = match value.get(field)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Main error type for the VoltUp client
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API request failed with status {status}")]
    ApiError { status: u16, body: ApiErrorBody },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Server-supplied error code (e.g. `C005`), if this is a domain error
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::ApiError { body, .. } => body.code.as_deref(),
            _ => None,
        }
    }

    /// Server-supplied free-text message, trimmed, if non-blank
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::ApiError { body, .. } => body
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend answered at all (domain error vs transport failure)
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::ApiError { .. })
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_keeps_message() {
        let body = ApiErrorBody::from_json(r#"{"code":400,"message":"Product closed for today"}"#);
        assert_eq!(body.code.as_deref(), Some("400"));
        assert_eq!(body.message.as_deref(), Some("Product closed for today"));
    }

    #[test]
    fn test_odd_fields_are_dropped_individually() {
        let body = ApiErrorBody::from_json(r#"{"code":{"nested":true},"message":"Sold out"}"#);
        assert_eq!(body.code, None);
        assert_eq!(body.message.as_deref(), Some("Sold out"));

        let body = ApiErrorBody::from_json(r#"{"code":"C005","message":null}"#);
        assert_eq!(body.code.as_deref(), Some("C005"));
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_non_json_body_is_empty() {
        assert_eq!(ApiErrorBody::from_json("<html>Bad Gateway</html>"), ApiErrorBody::default());
        assert_eq!(ApiErrorBody::from_json(""), ApiErrorBody::default());
    }
}
