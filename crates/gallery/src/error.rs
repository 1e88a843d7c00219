//! Typed error enum for the gallery controller.

use pixgallery_client::ClientError;
use thiserror::Error;

/// Failures that escape the controller after being reported to the user.
///
/// Empty queries, empty result sets and exhausted pagination are outcomes,
/// not errors; only a failed round-trip ends up here.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The search request was rejected by the transport or the remote service.
    #[error("{0}")]
    Fetch(#[from] ClientError),
}

impl GalleryError {
    /// Whether the remote service answered with an error rather than the network failing.
    pub fn is_api_error(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_api_error(),
        }
    }
}
