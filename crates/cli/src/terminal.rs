//! Terminal collaborators: cards go to stdout, toasts to stderr.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pixgallery_core::ImageRecord;
use pixgallery_gallery::{GalleryView, Lightbox, Notifier, ScrollBehavior};

pub(crate) struct TerminalGallery {
    print_cards: bool,
    records: Mutex<Vec<ImageRecord>>,
}

impl TerminalGallery {
    pub(crate) fn new(print_cards: bool) -> Self {
        Self { print_cards, records: Mutex::default() }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ImageRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn records(&self) -> Vec<ImageRecord> {
        self.lock().clone()
    }
}

fn format_card(position: usize, record: &ImageRecord) -> String {
    format!(
        "#{position} {tags}\n    Likes {likes}  Views {views}  Comments {comments}  Downloads {downloads}\n    {full}",
        tags = record.tags,
        likes = record.likes,
        views = record.views,
        comments = record.comments,
        downloads = record.downloads,
        full = record.full_url,
    )
}

impl GalleryView for TerminalGallery {
    fn clear(&self) {
        self.lock().clear();
    }

    fn append(&self, records: &[ImageRecord]) {
        let mut stored = self.lock();
        for record in records {
            stored.push(record.clone());
            if self.print_cards {
                println!("{}", format_card(stored.len(), record));
            }
        }
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    // A terminal has no layout to scroll within.
    fn item_offset_top(&self, _index: usize) -> Option<f64> {
        None
    }

    fn scroll_top(&self) -> f64 {
        0.0
    }

    fn scroll_to(&self, _top: f64, _behavior: ScrollBehavior) {}
}

pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("✔ {message}");
    }

    fn failure(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}

/// Nothing to enlarge in a terminal; keeps a count of viewable images for the log.
pub(crate) struct TerminalLightbox {
    gallery: Arc<TerminalGallery>,
}

impl TerminalLightbox {
    pub(crate) fn new(gallery: Arc<TerminalGallery>) -> Self {
        Self { gallery }
    }
}

impl Lightbox for TerminalLightbox {
    fn refresh(&self) {
        tracing::debug!(images = self.gallery.len(), "lightbox re-indexed");
    }
}
