// error.rs

use reqwest::StatusCode;
use std::fmt;

/// Main error type for Coolify SDK operations
#[derive(Debug)]
pub enum CoolifyError {
    /// Invalid configuration (malformed URL, missing token)
    ConfigurationError(String),
    /// HTTP request failed with status code and remote message
    RequestFailed { status: StatusCode, message: String },
    /// Network/connection error (e.g., timeout, DNS failure)
    ConnectionError(String),
    /// JSON or data serialization/deserialization error
    SerializationError(String),
    /// Generic error (use sparingly)
    Other(String),
}

impl fmt::Display for CoolifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Self::RequestFailed { status, message } => {
                write!(f, "HTTP request failed with status {}: {}", status, message)
            }
            Self::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CoolifyError {}

// Conversion implementations
impl From<url::ParseError> for CoolifyError {
    fn from(e: url::ParseError) -> Self {
        Self::ConfigurationError(format!("Invalid URL: {}", e))
    }
}

impl From<reqwest::Error> for CoolifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::SerializationError(err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::ConnectionError(err.to_string())
        } else if let Some(status) = err.status() {
            Self::RequestFailed { status, message: err.to_string() }
        } else {
            Self::Other(err.to_string())
        }
    }
}
