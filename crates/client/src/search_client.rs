use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pixgallery_core::{SearchResultPage, SearchSession};

use crate::error::ClientError;
use crate::source::ImageSource;

/// Search client: owns the session (query + page cursor) and performs one
/// round-trip per [`fetch_image`](Self::fetch_image) call.
///
/// The client never validates the query and never moves the page cursor on its
/// own; callers reset or increment before fetching.
pub struct SearchClient {
    source: Arc<dyn ImageSource>,
    session: Mutex<SearchSession>,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient").field("session", &*self.lock_session()).finish()
    }
}

impl SearchClient {
    #[must_use]
    pub fn new(source: Arc<dyn ImageSource>, page_size: u32) -> Self {
        Self { source, session: Mutex::new(SearchSession::new(page_size)) }
    }

    fn lock_session(&self) -> MutexGuard<'_, SearchSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.lock_session().set_query(query);
    }

    pub fn reset_page(&self) {
        self.lock_session().reset_page();
    }

    pub fn increment_page(&self) {
        self.lock_session().increment_page();
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.lock_session().page()
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.lock_session().page_size()
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.lock_session().query().to_owned()
    }

    /// Copy of the current session state.
    #[must_use]
    pub fn session(&self) -> SearchSession {
        self.lock_session().clone()
    }

    /// Fetch `page` (or the session's current page) for the current query.
    ///
    /// # Errors
    /// Propagates the source's [`ClientError`] unchanged; there is no retry.
    pub async fn fetch_image(&self, page: Option<u32>) -> Result<SearchResultPage, ClientError> {
        let (query, page) = {
            let session = self.lock_session();
            (session.query().to_owned(), page.unwrap_or(session.page()))
        };
        self.fetch_page(&query, page).await
    }

    /// Fetch `page` for `query` at the session's page size, leaving the
    /// session untouched. Callers that read the session under their own lock
    /// use this to send exactly what they read.
    ///
    /// # Errors
    /// Propagates the source's [`ClientError`] unchanged.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, ClientError> {
        let per_page = self.page_size();
        self.source.search(query, page, per_page).await
    }
}
