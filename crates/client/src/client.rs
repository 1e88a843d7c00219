use async_trait::async_trait;
use pixgallery_core::{GalleryConfig, SearchResultPage};

use crate::api_types::SearchParams;
use crate::error::ClientError;
use crate::source::ImageSource;

/// Client for the Pixabay search API.
pub struct PixabayClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for PixabayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixabayClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PixabayClient {
    /// Creates a new client with the given API key, base URL and request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String, timeout_secs: u64) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url })
    }

    /// # Errors
    /// See [`PixabayClient::new`].
    pub fn from_config(config: &GalleryConfig) -> Result<Self, ClientError> {
        Self::new(config.api_key.clone(), config.base_url.clone(), config.timeout_secs)
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.base_url)
    }
}

#[async_trait]
impl ImageSource for PixabayClient {
    async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResultPage, ClientError> {
        let params = SearchParams::new(&self.api_key, query, page, per_page);
        tracing::debug!(query, page, per_page, "fetching image page");

        let response = self.client.get(self.endpoint()).query(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus { code: status.as_u16(), body });
        }

        let result: SearchResultPage =
            serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
                context: format!("search response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        tracing::debug!(
            query,
            page,
            hits = result.hits.len(),
            total_hits = result.total_hits,
            "image page received"
        );
        Ok(result)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
