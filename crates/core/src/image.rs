use serde::{Deserialize, Serialize};

/// One hit returned by the image search API.
///
/// Display-only projection: the gallery never mutates or identifies records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    #[serde(rename(deserialize = "webformatURL"))]
    pub preview_url: String,
    #[serde(rename(deserialize = "largeImageURL"))]
    pub full_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

/// One page of search results, produced fresh per fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResultPage {
    #[serde(default)]
    pub hits: Vec<ImageRecord>,
    #[serde(default, rename(deserialize = "totalHits"))]
    pub total_hits: u64,
}

impl SearchResultPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether this page held fewer hits than were requested, i.e. nothing follows it.
    #[must_use]
    pub fn is_last(&self, page_size: u32) -> bool {
        self.hits.len() < page_size as usize
    }
}
