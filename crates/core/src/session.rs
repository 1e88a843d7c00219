use serde::Serialize;

/// Search-session state: the query being paged through and the page cursor.
///
/// `page` is 1-based and only moves through [`reset_page`](Self::reset_page) and
/// [`increment_page`](Self::increment_page). `page_size` is fixed at construction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    page: u32,
    page_size: u32,
}

impl SearchSession {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { query: String::new(), page: 1, page_size }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Replaces the query wholesale. The page cursor is left alone.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn increment_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Zero-based index of the first item of the current page within the gallery.
    #[must_use]
    pub fn first_index_of_page(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}
