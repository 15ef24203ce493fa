//! Error types for the flowgen server
//!
//! This module contains the error types used throughout the server.

use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The caller supplied no usable description
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The server is missing required deployment configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The upstream model call failed (network, timeout, or non-2xx status)
    #[error("API request failed{}: {reason}", .status.map(|s| format!(" with status {}", s)).unwrap_or_default())]
    UpstreamError {
        /// HTTP status returned by the provider, when one was received
        status: Option<u16>,
        /// Human-readable failure reason
        reason: String,
    },

    /// The model returned text that is not valid JSON
    #[error("Failed to decode JSON from model response")]
    MalformedResponse {
        /// The exact upstream text, kept for diagnostics
        raw: String,
    },

    /// The model returned valid JSON lacking the required keys
    #[error("Invalid JSON structure received from model: {0}")]
    InvalidShape(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        ServerError::UpstreamError {
            status: err.status().map(|s| s.as_u16()),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::InternalError(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

impl ServerError {
    /// Check if the error is a client fault (maps to a 4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServerError::MissingInput(_))
    }

    /// Check if the error came from the upstream provider
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            ServerError::UpstreamError { .. }
                | ServerError::MalformedResponse { .. }
                | ServerError::InvalidShape(_)
        )
    }
}
