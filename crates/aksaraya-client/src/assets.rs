//! Cover image URLs.

use crate::api::join_url;

/// Image shown when an entry has no cover.
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/100x150?text=No+Cover";

/// Resolve a backend cover path against `base_url`.
///
/// Absolute URLs pass through; empty paths fall back to [`PLACEHOLDER_COVER`].
#[must_use]
pub fn cover_url(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        PLACEHOLDER_COVER.to_string()
    } else if path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
        || path.starts_with("blob:")
    {
        path.to_string()
    } else {
        join_url(base_url, path)
    }
}
