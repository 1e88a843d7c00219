//! Shared constants for pixgallery.
//!
//! Pixabay limits and the notification texts shown to the user live here so the
//! browser and terminal surfaces report outcomes identically.

/// Default Pixabay endpoint.
pub const DEFAULT_API_URL: &str = "https://pixabay.com/api";

/// Number of hits requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// Smallest `per_page` Pixabay accepts.
pub const MIN_PAGE_SIZE: u32 = 3;

/// Largest `per_page` Pixabay accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Request timeout for the search API, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gap left between the viewport top and the first card of a freshly loaded batch.
pub const SCROLL_PADDING_PX: f64 = 15.0;

/// Shown when a search returns no hits at all.
pub const NO_RESULTS_MESSAGE: &str =
    "Sorry, there are no images matching your search query. Please try again.";

/// Shown when a page comes back shorter than the page size.
pub const END_OF_RESULTS_MESSAGE: &str =
    "We're sorry, but you've reached the end of search results.";

/// Success toast after the first page of a search lands.
#[must_use]
pub fn found_images_message(total_hits: u64) -> String {
    format!("Hooray! We found {total_hits} images.")
}
