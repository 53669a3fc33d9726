//! Client configuration.
//!
//! # Design
//! - Construction validates every field; a built [`ClientConfig`] is always usable.
//! - Defaults match the browse grid (12 cards) and the search box debounce (250 ms).

use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::query::DEFAULT_PAGE_LIMIT;

/// Default keyword debounce in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 250;

/// Upper bound accepted for the page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Settings shared by every transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    page_limit: u32,
    search_debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl ClientConfig {
    /// Validated configuration for `base_url` with default paging and debounce.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `base_url` is empty or not http(s).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Config {
                field: "base_url",
                reason: "base url must not be empty",
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::Config {
                field: "base_url",
                reason: "base url must use http or https",
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        })
    }

    /// Override the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `limit` is outside `1..=MAX_PAGE_LIMIT`.
    pub fn with_page_limit(mut self, limit: u32) -> ClientResult<Self> {
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(ClientError::Config {
                field: "page_limit",
                reason: "page limit must be between 1 and 100",
            });
        }
        self.page_limit = limit;
        Ok(self)
    }

    /// Override the keyword debounce.
    #[must_use]
    pub const fn with_search_debounce_ms(mut self, millis: u32) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Cards per browse page.
    #[must_use]
    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Keyword debounce in milliseconds.
    #[must_use]
    pub const fn search_debounce_ms(&self) -> u32 {
        self.search_debounce_ms
    }

    /// Keyword debounce as a [`Duration`].
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.search_debounce_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = ClientConfig::new("http://localhost:3000/").expect("config");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.page_limit(), 12);
        assert_eq!(config.search_debounce(), Duration::from_millis(250));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ClientConfig::new("  ").is_err());
        assert!(ClientConfig::new("ftp://files").is_err());
        let config = ClientConfig::new("https://api.test").expect("config");
        assert!(config.clone().with_page_limit(0).is_err());
        assert_eq!(
            config.with_page_limit(24).map(|config| config.page_limit()),
            Ok(24)
        );
    }
}
