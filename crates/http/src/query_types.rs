//! Request/query types (Deserialize)

use serde::Deserialize;

/// The search form's fields, as submitted with `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default, rename = "searchQuery")]
    pub search_query: String,
}
