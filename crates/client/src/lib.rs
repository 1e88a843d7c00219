//! Image search client for pixgallery.
//!
//! [`PixabayClient`] performs the HTTP round-trip; [`SearchClient`] layers the
//! paginated search session on top of any [`ImageSource`].

pub mod api_types;
mod client;
pub mod error;
mod search_client;
mod source;


pub use client::PixabayClient;
pub use error::ClientError;
pub use search_client::SearchClient;
pub use source::ImageSource;
