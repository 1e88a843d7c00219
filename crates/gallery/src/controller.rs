//! Bridges form submission and load-more clicks to the search client and
//! reflects the outcome in the gallery, the load-more control and toasts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pixgallery_client::SearchClient;
use pixgallery_core::{
    END_OF_RESULTS_MESSAGE, NO_RESULTS_MESSAGE, SCROLL_PADDING_PX, SearchResultPage,
    SearchSession, found_images_message,
};
use serde::Serialize;

use crate::collaborators::{GalleryView, Lightbox, LoadMoreControl, Notifier, ScrollBehavior};
use crate::error::GalleryError;

/// The surface a controller drives, constructed once and handed to
/// [`ViewController::new`].
#[derive(Clone)]
pub struct GalleryContext {
    pub gallery: Arc<dyn GalleryView>,
    pub load_more: Arc<dyn LoadMoreControl>,
    pub notifier: Arc<dyn Notifier>,
    pub lightbox: Arc<dyn Lightbox>,
}

/// What a successfully rendered page looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub page: u32,
    pub hits: usize,
    pub total_hits: u64,
    /// The page was short, so the load-more control is now hidden for good.
    pub exhausted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Blank query; nothing was fetched.
    Ignored,
    NoResults,
    Loaded(PageSummary),
    /// A newer search started while this one was in flight; its response was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadMoreOutcome {
    Loaded(PageSummary),
    /// Another fetch is still in flight.
    Busy,
    /// The control is hidden: no search yet, results exhausted, or the last fetch failed.
    Unavailable,
    Stale,
}

#[derive(Debug, Default)]
struct FetchState {
    /// Bumped on every submitted search.
    session_token: u64,
    /// Token of the fetch currently awaiting a response.
    in_flight: Option<u64>,
}

pub struct ViewController {
    client: SearchClient,
    view: GalleryContext,
    state: Mutex<FetchState>,
}

impl ViewController {
    #[must_use]
    pub fn new(client: SearchClient, view: GalleryContext) -> Self {
        view.load_more.hide();
        Self { client, view, state: Mutex::default() }
    }

    #[must_use]
    pub const fn client(&self) -> &SearchClient {
        &self.client
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.lock_state().in_flight.is_some()
    }

    fn lock_state(&self) -> MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle a search form submission.
    ///
    /// # Errors
    /// Returns [`GalleryError::Fetch`] when the first page cannot be fetched,
    /// after the failure has been shown to the user.
    pub async fn submit(&self, raw_query: &str) -> Result<SubmitOutcome, GalleryError> {
        let query = raw_query.trim();
        if query.is_empty() {
            self.view.load_more.hide();
            tracing::debug!("blank search query ignored");
            return Ok(SubmitOutcome::Ignored);
        }

        // Lock order: state, then session.
        let (token, session) = {
            let mut state = self.lock_state();
            state.session_token = state.session_token.wrapping_add(1);
            state.in_flight = Some(state.session_token);
            self.client.set_query(query);
            self.client.reset_page();
            (state.session_token, self.client.session())
        };

        self.view.gallery.clear();
        self.view.load_more.hide();
        tracing::info!(query, token, "search submitted");

        let result = self.client.fetch_page(session.query(), session.page()).await;
        if !self.finish_fetch(token) {
            tracing::warn!(query, token, "discarding response of superseded search");
            return Ok(SubmitOutcome::Stale);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(query, error = %e, "search failed");
                self.view.notifier.failure(&e.to_string());
                return Err(e.into());
            },
        };

        if page.is_empty() {
            tracing::info!(query, "search returned no images");
            self.view.notifier.failure(NO_RESULTS_MESSAGE);
            return Ok(SubmitOutcome::NoResults);
        }

        self.render(&page);
        self.scroll_to_page_start(&session);
        self.view.notifier.success(&found_images_message(page.total_hits));
        let summary = self.settle_control(&page, &session);
        tracing::info!(query, hits = summary.hits, total_hits = summary.total_hits, "search rendered");
        Ok(SubmitOutcome::Loaded(summary))
    }

    /// Handle a click on the load-more control.
    ///
    /// # Errors
    /// Returns [`GalleryError::Fetch`] when the next page cannot be fetched,
    /// after the failure has been shown to the user.
    pub async fn load_more(&self) -> Result<LoadMoreOutcome, GalleryError> {
        let (token, session) = {
            let mut state = self.lock_state();
            if state.in_flight.is_some() {
                tracing::debug!("load more ignored, fetch in flight");
                return Ok(LoadMoreOutcome::Busy);
            }
            if !self.view.load_more.is_visible() {
                tracing::debug!("load more ignored, control hidden");
                return Ok(LoadMoreOutcome::Unavailable);
            }
            state.in_flight = Some(state.session_token);
            self.client.increment_page();
            (state.session_token, self.client.session())
        };

        let page_number = session.page();
        self.view.load_more.hide();
        tracing::info!(page = page_number, token, "loading more images");

        let result = self.client.fetch_page(session.query(), page_number).await;
        if !self.finish_fetch(token) {
            tracing::warn!(page = page_number, token, "discarding page of superseded search");
            return Ok(LoadMoreOutcome::Stale);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(page = page_number, error = %e, "load more failed");
                self.view.notifier.failure(&e.to_string());
                return Err(e.into());
            },
        };

        self.render(&page);
        let summary = self.settle_control(&page, &session);
        tracing::info!(page = page_number, hits = summary.hits, "page appended");
        Ok(LoadMoreOutcome::Loaded(summary))
    }

    /// Clears the in-flight marker if `token` still names the current search.
    /// Returns whether the response belongs to the current search.
    fn finish_fetch(&self, token: u64) -> bool {
        let mut state = self.lock_state();
        if state.session_token != token {
            return false;
        }
        if state.in_flight == Some(token) {
            state.in_flight = None;
        }
        true
    }

    fn render(&self, page: &SearchResultPage) {
        self.view.gallery.append(&page.hits);
        self.view.lightbox.refresh();
    }

    /// Reveal the control after a full page; otherwise hide it and say so.
    fn settle_control(&self, page: &SearchResultPage, session: &SearchSession) -> PageSummary {
        let exhausted = page.is_last(session.page_size());
        if exhausted {
            self.view.load_more.hide();
            self.view.notifier.failure(END_OF_RESULTS_MESSAGE);
        } else {
            self.view.load_more.show();
        }
        PageSummary {
            page: session.page(),
            hits: page.len(),
            total_hits: page.total_hits,
            exhausted,
        }
    }

    /// Bring the first card of the fetched page to just below the viewport top.
    fn scroll_to_page_start(&self, session: &SearchSession) {
        let index = session.first_index_of_page();
        let Some(offset) = self.view.gallery.item_offset_top(index) else {
            tracing::debug!(index, "scroll target not laid out, skipping scroll");
            return;
        };
        let top = self.view.gallery.scroll_top() + offset - SCROLL_PADDING_PX;
        self.view.gallery.scroll_to(top, ScrollBehavior::Smooth);
    }
}
