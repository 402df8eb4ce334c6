//! Error types for healwatch-monitor
//!
//! Fetch failures are recoverable by design: they end up in the dashboard
//! state as an indicator and never stop the polling loop.

use serde::Serialize;
use thiserror::Error;

/// A single fetch cycle failed
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    /// Remote unreachable, timed out, or connection dropped
    #[error("network error: {0}")]
    Network(String),

    /// Remote answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Body was not a list of test outcomes
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// A record whose raw status is outside the known taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("test {name:?} has unknown status {status:?}")]
pub struct InvalidStatusError {
    /// Name of the rejected record
    pub name: String,
    /// Offending status text
    pub status: String,
}

/// Errors raised while setting up monitoring
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for a fetch cycle
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for monitor setup
pub type MonitorResult<T> = Result<T, MonitorError>;
