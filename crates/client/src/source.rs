use async_trait::async_trait;
use pixgallery_core::SearchResultPage;

use crate::error::ClientError;

/// One round-trip to an image search backend.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch `page` (1-based) of results for `query`, at most `per_page` hits.
    async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResultPage, ClientError>;
}
