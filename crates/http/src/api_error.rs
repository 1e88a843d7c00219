//! Typed API error for HTTP handlers.
//!
//! A failed search has already been queued as a toast by the controller; the
//! handler still reports it to the caller so the failure is not swallowed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pixgallery_gallery::GalleryError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 502 Bad Gateway — the image search API rejected the request or could not be reached.
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadGateway(msg) => {
                tracing::warn!(error = %msg, "image search failed");
                (StatusCode::BAD_GATEWAY, msg)
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<GalleryError> for ApiError {
    fn from(err: GalleryError) -> Self {
        match err {
            GalleryError::Fetch(_) => Self::BadGateway(err.to_string()),
        }
    }
}
