//! Seams between the controller and whatever surface displays the gallery.

use pixgallery_core::ImageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The container cards are rendered into, plus the viewport it scrolls in.
pub trait GalleryView: Send + Sync {
    /// Remove every rendered card.
    fn clear(&self);

    /// Render one card per record at the end of the gallery.
    fn append(&self, records: &[ImageRecord]);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance from the viewport top to the card at `index`, if that card exists
    /// and the surface has a notion of layout.
    fn item_offset_top(&self, index: usize) -> Option<f64>;

    /// Current vertical scroll position of the viewport.
    fn scroll_top(&self) -> f64;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// The "load more" affordance. Visibility is purely presentational here;
/// in-flight tracking is the controller's business.
pub trait LoadMoreControl: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// Fire-and-forget toast notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Overlay that enlarges gallery images; must re-scan after the gallery changes.
pub trait Lightbox: Send + Sync {
    fn refresh(&self);
}
