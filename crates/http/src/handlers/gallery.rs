use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Redirect;
use pixgallery_gallery::{GalleryView, LoadMoreControl};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SearchForm;
use crate::response_types::GallerySnapshot;

/// Form submission: start a new search, then send the browser back to the page.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(form): Query<SearchForm>,
) -> Result<Redirect, ApiError> {
    let outcome = state.controller.submit(&form.search_query).await?;
    tracing::debug!(?outcome, "search handled");
    Ok(Redirect::to("/"))
}

pub async fn load_more(State(state): State<Arc<AppState>>) -> Result<Redirect, ApiError> {
    let outcome = state.controller.load_more().await?;
    tracing::debug!(?outcome, "load more handled");
    Ok(Redirect::to("/"))
}

pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<GallerySnapshot> {
    let session = state.controller.client().session();
    Json(GallerySnapshot {
        query: session.query().to_owned(),
        page: session.page(),
        page_size: session.page_size(),
        items: state.gallery.len(),
        load_more_visible: state.load_more.is_visible(),
        fetching: state.controller.is_fetching(),
        lightbox_links: state.lightbox.links().len(),
        pending_notifications: state.notifications.snapshot(),
    })
}
