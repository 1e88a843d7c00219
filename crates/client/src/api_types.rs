//! Wire types for the Pixabay search endpoint.

use serde::Serialize;

/// Only photos are shown in the gallery.
pub const IMAGE_TYPE: &str = "photo";
/// Landscape images fit the card grid.
pub const ORIENTATION: &str = "horizontal";
pub const SAFE_SEARCH: bool = true;

/// Query string sent with every search request.
#[derive(Debug, Serialize)]
pub struct SearchParams<'a> {
    pub key: &'a str,
    pub q: &'a str,
    pub page: u32,
    pub per_page: u32,
    pub image_type: &'static str,
    pub orientation: &'static str,
    pub safesearch: bool,
}

impl<'a> SearchParams<'a> {
    #[must_use]
    pub const fn new(key: &'a str, q: &'a str, page: u32, per_page: u32) -> Self {
        Self {
            key,
            q,
            page,
            per_page,
            image_type: IMAGE_TYPE,
            orientation: ORIENTATION,
            safesearch: SAFE_SEARCH,
        }
    }
}
