//! Generation error types.

use thiserror::Error;

/// Transport or service failure for one generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status or an error payload.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code (or the `code` of an in-stream error payload).
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response stream failed part-way through.
    #[error("stream error: {0}")]
    Stream(String),

    /// A response body or stream event could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Failure of a structured (JSON-mode) generation call.
#[derive(Debug, Error)]
pub enum StructuredError {
    /// The underlying call failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The call succeeded but its text is not the expected JSON value.
    #[error("malformed structured response: {source}")]
    MalformedResponse {
        /// Response text exactly as received, before fence stripping.
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StructuredError {
    /// Raw response text, when the failure happened after the call returned.
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw, .. } => Some(raw),
            Self::Generation(_) => None,
        }
    }
}
