//! Response types (Serialize)

use pixgallery_gallery::Notification;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GallerySnapshot {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub items: usize,
    pub load_more_visible: bool,
    pub fetching: bool,
    pub lightbox_links: usize,
    /// Toasts not yet shown; reading the snapshot does not consume them.
    pub pending_notifications: Vec<Notification>,
}
