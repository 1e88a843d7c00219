//! Runtime configuration assembled from environment variables.

use std::fmt;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
use crate::env_config::parse_with_default;
use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "PIXABAY_API_KEY";
pub const API_URL_VAR: &str = "PIXGALLERY_API_URL";
pub const PAGE_SIZE_VAR: &str = "PIXGALLERY_PAGE_SIZE";
pub const TIMEOUT_VAR: &str = "PIXGALLERY_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl fmt::Debug for GalleryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GalleryConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when `PIXABAY_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when the API key is unset or blank,
    /// and [`ConfigError::InvalidValue`] when the API URL is not http(s).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let base_url = lookup(API_URL_VAR)
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: API_URL_VAR,
                reason: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }

        let requested = parse_with_default(PAGE_SIZE_VAR, lookup(PAGE_SIZE_VAR), DEFAULT_PAGE_SIZE);
        let page_size = requested.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        if page_size != requested {
            tracing::warn!(requested, page_size, "page size outside API limits, clamped");
        }

        let timeout_secs = parse_with_default(TIMEOUT_VAR, lookup(TIMEOUT_VAR), DEFAULT_TIMEOUT_SECS);

        Ok(Self { api_key, base_url, page_size, timeout_secs })
    }
}
