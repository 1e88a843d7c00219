//! Gallery view controller for pixgallery.
//!
//! Coordinates the search client with the surface that shows results:
//! form submissions start a search, load-more appends the next page, and every
//! outcome is reflected in the gallery, the load-more control and toasts.

mod collaborators;
mod controller;
mod error;
pub mod markup;
pub mod memory;

#[cfg(test)]
mod controller_tests;

pub use collaborators::{GalleryView, Lightbox, LoadMoreControl, Notifier, ScrollBehavior};
pub use controller::{GalleryContext, LoadMoreOutcome, PageSummary, SubmitOutcome, ViewController};
pub use error::GalleryError;
pub use memory::{
    GridLayout, HtmlGallery, LightboxIndex, LoadMoreButton, Notification, NotificationKind,
    NotificationLog,
};
