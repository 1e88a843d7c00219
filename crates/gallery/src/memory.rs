//! In-memory collaborators: an HTML gallery with a simple grid layout model,
//! the load-more button, a toast queue and the lightbox link index.
//!
//! The browser surface renders its page from these; tests inspect them directly.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pixgallery_core::ImageRecord;
use serde::Serialize;

use crate::collaborators::{GalleryView, Lightbox, LoadMoreControl, Notifier, ScrollBehavior};
use crate::markup::render_card;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Grid geometry used to answer "where is card N on screen".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub row_height: f64,
    /// Height of everything above the first row (header, search form).
    pub top_offset: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { columns: 4, row_height: 320.0, top_offset: 96.0 }
    }
}

#[derive(Debug, Clone)]
struct RenderedCard {
    html: String,
    full_url: String,
}

#[derive(Debug, Default)]
struct GalleryState {
    cards: Vec<RenderedCard>,
    scroll_top: f64,
    scrolls: Vec<(f64, ScrollBehavior)>,
    /// Latest scroll request not yet handed to a rendered page.
    pending_scroll: Option<(f64, ScrollBehavior)>,
}

#[derive(Debug, Default)]
pub struct HtmlGallery {
    layout: GridLayout,
    state: Mutex<GalleryState>,
}

impl HtmlGallery {
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self { layout, state: Mutex::default() }
    }

    /// Concatenated markup of every card, in gallery order.
    #[must_use]
    pub fn inner_html(&self) -> String {
        lock(&self.state).cards.iter().map(|c| c.html.as_str()).collect()
    }

    /// Targets of the card anchors, in gallery order.
    #[must_use]
    pub fn links(&self) -> Vec<String> {
        lock(&self.state).cards.iter().map(|c| c.full_url.clone()).collect()
    }

    /// Every scroll request received so far.
    #[must_use]
    pub fn scroll_history(&self) -> Vec<(f64, ScrollBehavior)> {
        lock(&self.state).scrolls.clone()
    }

    /// Take the scroll request the next rendered page should perform, if any.
    pub fn take_pending_scroll(&self) -> Option<(f64, ScrollBehavior)> {
        lock(&self.state).pending_scroll.take()
    }
}

impl GalleryView for HtmlGallery {
    fn clear(&self) {
        let mut state = lock(&self.state);
        state.cards.clear();
        state.pending_scroll = None;
    }

    fn append(&self, records: &[ImageRecord]) {
        let rendered = records
            .iter()
            .map(|r| RenderedCard { html: render_card(r), full_url: r.full_url.clone() });
        lock(&self.state).cards.extend(rendered);
    }

    fn len(&self) -> usize {
        lock(&self.state).cards.len()
    }

    fn item_offset_top(&self, index: usize) -> Option<f64> {
        let state = lock(&self.state);
        if index >= state.cards.len() {
            return None;
        }
        let row = index / self.layout.columns.max(1);
        #[allow(clippy::cast_precision_loss, reason = "row counts are small")]
        let document_top = self.layout.top_offset + row as f64 * self.layout.row_height;
        Some(document_top - state.scroll_top)
    }

    fn scroll_top(&self) -> f64 {
        lock(&self.state).scroll_top
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let mut state = lock(&self.state);
        let top = top.max(0.0);
        state.scroll_top = top;
        state.scrolls.push((top, behavior));
        state.pending_scroll = Some((top, behavior));
    }
}

#[derive(Debug, Default)]
pub struct LoadMoreButton {
    visible: AtomicBool,
}

impl LoadMoreButton {
    /// CSS class list for the button element.
    #[must_use]
    pub fn class_list(&self) -> &'static str {
        if self.is_visible() { "load-more" } else { "load-more is-hidden" }
    }
}

impl LoadMoreControl for LoadMoreButton {
    fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Toast queue. Messages accumulate until a surface drains them for display.
#[derive(Debug, Default)]
pub struct NotificationLog {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    fn push(&self, kind: NotificationKind, message: &str) {
        lock(&self.pending).push(Notification { kind, message: message.to_owned() });
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *lock(&self.pending))
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        lock(&self.pending).clone()
    }
}

impl Notifier for NotificationLog {
    fn success(&self, message: &str) {
        tracing::info!(message, "notify success");
        self.push(NotificationKind::Success, message);
    }

    fn failure(&self, message: &str) {
        tracing::info!(message, "notify failure");
        self.push(NotificationKind::Failure, message);
    }
}

/// Lightbox over an [`HtmlGallery`]: keeps the list of full-size images it can open.
#[derive(Debug)]
pub struct LightboxIndex {
    gallery: Arc<HtmlGallery>,
    links: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl LightboxIndex {
    /// Indexes the gallery's current anchors immediately.
    #[must_use]
    pub fn new(gallery: Arc<HtmlGallery>) -> Self {
        let links = Mutex::new(gallery.links());
        Self { gallery, links, refreshes: AtomicUsize::new(0) }
    }

    #[must_use]
    pub fn links(&self) -> Vec<String> {
        lock(&self.links).clone()
    }

    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl Lightbox for LightboxIndex {
    fn refresh(&self) {
        let links = self.gallery.links();
        tracing::debug!(count = links.len(), "lightbox re-indexed");
        *lock(&self.links) = links;
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}
