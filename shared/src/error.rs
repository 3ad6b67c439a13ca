//! Errors raised at the event service seam.

use thiserror::Error;

/// Failure talking to the event service.
///
/// The view never surfaces these; they are logged where they happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventApiError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("HTTP error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for the log line.
        body: String,
    },

    /// The body could not be decoded.
    #[error("parse error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for EventApiError {
    fn from(err: serde_json::Error) -> Self {
        EventApiError::Decode(err.to_string())
    }
}
