//! Error types for section fetching.

use thiserror::Error;

/// Errors that can occur while fetching and decoding the section feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed; no request was attempted
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (connect, TLS, body read)
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Server returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not a valid sections document
    #[error("Failed to decode sections payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

impl FetchError {
    /// Short machine-readable category for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Client(_) => "client_error",
            FetchError::Network { .. } => "network_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode(_) => "decode_error",
            FetchError::Timeout { .. } => "timeout",
        }
    }
}
