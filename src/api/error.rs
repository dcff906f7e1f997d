/// Error types for the action endpoint transport
use thiserror::Error;

/// Errors that can occur while talking to the action endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, timeout, TLS...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Endpoint error (status {status}): {message}")]
    Endpoint {
        /// HTTP status code
        status: u16,
        /// `message` from the response body, or the status line when absent
        message: String,
    },

    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl TransportError {
    pub fn endpoint(status: u16, message: impl Into<String>) -> Self {
        Self::Endpoint {
            status,
            message: message.into(),
        }
    }

    /// Human-readable message suitable for logs and the terminal.
    pub fn message(&self) -> String {
        match self {
            Self::Endpoint { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Endpoint { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}
