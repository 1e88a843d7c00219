//! Typed error enum for the search client.

use thiserror::Error;

/// Errors from image search API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the remote service answered, as opposed to the transport failing.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::JsonParse { .. })
    }
}
