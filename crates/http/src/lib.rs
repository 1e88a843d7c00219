//! HTTP surface for pixgallery.
//!
//! Serves the gallery page in the browser. The page is rendered server-side
//! from the in-memory collaborators the controller drives, so the search form,
//! cards, load-more button, toasts and lightbox index all reflect one session.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;


use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pixgallery_client::SearchClient;
use pixgallery_gallery::{
    GalleryContext, GridLayout, HtmlGallery, LightboxIndex, LoadMoreButton, NotificationLog,
    ViewController,
};
use tower_http::trace::TraceLayer;

pub use response_types::GallerySnapshot;

/// Shared application state for all HTTP handlers.
///
/// Holds the controller plus concrete handles to the collaborators it drives,
/// which the page renderer reads back.
pub struct AppState {
    pub controller: ViewController,
    pub gallery: Arc<HtmlGallery>,
    pub load_more: Arc<LoadMoreButton>,
    pub notifications: Arc<NotificationLog>,
    pub lightbox: Arc<LightboxIndex>,
}

impl AppState {
    #[must_use]
    pub fn new(client: SearchClient, layout: GridLayout) -> Self {
        let gallery = Arc::new(HtmlGallery::new(layout));
        let load_more = Arc::new(LoadMoreButton::default());
        let notifications = Arc::new(NotificationLog::default());
        let lightbox = Arc::new(LightboxIndex::new(Arc::clone(&gallery)));
        let context = GalleryContext {
            gallery: gallery.clone(),
            load_more: load_more.clone(),
            notifier: notifications.clone(),
            lightbox: lightbox.clone(),
        };
        Self {
            controller: ViewController::new(client, context),
            gallery,
            load_more,
            notifications,
            lightbox,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/search", get(handlers::gallery::search))
        .route("/load-more", post(handlers::gallery::load_more))
        .route("/api/gallery", get(handlers::gallery::snapshot))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
