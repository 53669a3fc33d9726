//! Catalog search query construction and the query service entrypoint.
//!
//! # Design
//! - Blank filters are omitted from the query string rather than sent empty.
//! - Pages are 1-based; a page of zero is clamped to the first page.
//! - The service issues exactly one request per call: no caching, no retry.

use aksaraya_api_models::{CatalogPage, SortOrder};

use crate::api::{CatalogApi, endpoints};
use crate::error::ClientResult;

/// Default number of entries requested per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

/// Filters and paging sent to `/catalogs/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free-text keyword.
    pub keyword: Option<String>,
    /// Exact genre filter.
    pub genre: Option<String>,
    /// Media type filter.
    pub kind: Option<String>,
    /// Publication year filter.
    pub year: Option<i32>,
    /// Sort column.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            genre: None,
            kind: None,
            year: None,
            sort_by: None,
            sort_order: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl CatalogQuery {
    /// Query for `page` with `limit` entries and no filters.
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// Set the keyword; blank input clears it.
    #[must_use]
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = non_blank(keyword);
        self
    }

    /// Set the genre; blank input clears it.
    #[must_use]
    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = non_blank(genre);
        self
    }

    /// Set the media type; blank input clears it.
    #[must_use]
    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = non_blank(kind);
        self
    }

    /// Set the year filter.
    #[must_use]
    pub const fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Set the sort column and direction.
    #[must_use]
    pub fn with_sort(mut self, column: &str, order: SortOrder) -> Self {
        self.sort_by = non_blank(column);
        self.sort_order = self.sort_by.as_ref().map(|_| order);
        self
    }

    /// Query-string pairs in the order the backend documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(8);
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(genre) = &self.genre {
            pairs.push(("genre", genre.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        pairs.push(("page", self.page.max(1).to_string()));
        pairs.push(("limit", self.limit.max(1).to_string()));
        pairs
    }

    /// Relative request path including the encoded query string.
    #[must_use]
    pub fn search_path(&self) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", endpoints::CATALOG_SEARCH)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fetch one page of search results.
///
/// A `lastPage` of zero (no matches) is normalised to 1 so page controls stay coherent.
///
/// # Errors
///
/// Propagates the transport's [`crate::ClientError`]; failures are also logged.
pub async fn fetch_page<A>(api: &A, query: &CatalogQuery) -> ClientResult<CatalogPage>
where
    A: CatalogApi + ?Sized,
{
    match api.search_catalogs(query).await {
        Ok(mut page) => {
            page.last_page = page.last_page.max(1);
            Ok(page)
        }
        Err(err) => {
            tracing::warn!(error = %err, page = query.page, "catalog search failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_omitted() {
        let query = CatalogQuery::page(1, 12).with_keyword("  ").with_genre("");
        assert_eq!(query.search_path(), "/catalogs/search?page=1&limit=12");
    }

    #[test]
    fn filters_are_encoded_in_order() {
        let query = CatalogQuery::page(2, 6)
            .with_keyword("bumi manusia")
            .with_genre("Seni & Budaya");
        assert_eq!(
            query.search_path(),
            "/catalogs/search?keyword=bumi%20manusia&genre=Seni%20%26%20Budaya&page=2&limit=6"
        );
    }

    #[test]
    fn optional_search_parameters_are_included() {
        let query = CatalogQuery::page(1, 10)
            .with_kind("Ebook")
            .with_year(Some(2020))
            .with_sort("title", SortOrder::Desc);
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("type", "Ebook".to_string())));
        assert!(pairs.contains(&("year", "2020".to_string())));
        assert!(pairs.contains(&("sortBy", "title".to_string())));
        assert!(pairs.contains(&("sortOrder", "desc".to_string())));
    }

    #[test]
    fn zero_page_is_clamped() {
        let query = CatalogQuery::page(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
    }
}
