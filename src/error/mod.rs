//! Error handling module

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Malformed response ({reason}): {body}")]
    MalformedResponse { reason: String, body: String },

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Unhandled HTTP status: {0}")]
    UnhandledStatus(reqwest::StatusCode),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScanError {
    /// Classify a reqwest send/read failure
    pub fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ScanError::Timeout(timeout)
        } else {
            ScanError::Transport(err)
        }
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, ScanError::Transport(e) if e.is_connect())
    }
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        ScanError::Config(err.to_string())
    }
}
