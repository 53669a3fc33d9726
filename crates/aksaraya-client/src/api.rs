//! The catalog API port.
//!
//! # Design
//! - One trait, one method per backend endpoint; transports own HTTP details.
//! - Futures are `?Send` so the same trait serves the browser's single-threaded
//!   executor and native runtimes.
//! - Authenticated calls take the bearer token explicitly; the session store
//!   decides where it comes from.

use aksaraya_api_models::{
    Catalog, CatalogId, CatalogPage, LoginRequest, LoginResponse, RegisterRequest, User,
};
use async_trait::async_trait;

use crate::error::ClientResult;
use crate::form::CatalogForm;
use crate::query::CatalogQuery;

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    use aksaraya_api_models::CatalogId;

    /// `POST` credentials, returns user and token.
    pub const LOGIN: &str = "/auth/login";
    /// `POST` a new account.
    pub const REGISTER: &str = "/auth/register";
    /// `GET` the account behind the bearer token.
    pub const ME: &str = "/auth/me";
    /// `GET` every catalog entry, `POST` a new one.
    pub const CATALOGS: &str = "/catalogs";
    /// `GET` a page of filtered entries.
    pub const CATALOG_SEARCH: &str = "/catalogs/search";

    /// `GET`/`PUT`/`DELETE` a single catalog entry.
    #[must_use]
    pub fn catalog(id: CatalogId) -> String {
        format!("{CATALOGS}/{id}")
    }

    /// `POST`/`DELETE` wishlist membership of a catalog entry.
    #[must_use]
    pub fn wishlist(id: CatalogId) -> String {
        format!("/wishlists/{id}")
    }
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join a base URL and an endpoint path with exactly one slash between them.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Transport-agnostic access to the catalog backend.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;

    /// `GET /auth/me`.
    async fn current_user(&self, token: &str) -> ClientResult<User>;

    /// `GET /catalogs`.
    async fn list_catalogs(&self) -> ClientResult<Vec<Catalog>>;

    /// `GET /catalogs/search`.
    async fn search_catalogs(&self, query: &CatalogQuery) -> ClientResult<CatalogPage>;

    /// `GET /catalogs/:id`.
    async fn get_catalog(&self, id: CatalogId) -> ClientResult<Catalog>;

    /// `POST /catalogs` (multipart).
    async fn create_catalog(&self, token: &str, form: &CatalogForm) -> ClientResult<()>;

    /// `PUT /catalogs/:id` (multipart).
    async fn update_catalog(&self, token: &str, id: CatalogId, form: &CatalogForm)
    -> ClientResult<()>;

    /// `DELETE /catalogs/:id`.
    async fn delete_catalog(&self, token: &str, id: CatalogId) -> ClientResult<()>;

    /// `POST /wishlists/:id`.
    async fn add_to_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()>;

    /// `DELETE /wishlists/:id`.
    async fn remove_from_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(
            join_url("http://api.test/", "/catalogs"),
            "http://api.test/catalogs"
        );
        assert_eq!(
            join_url("http://api.test", "catalogs/3"),
            "http://api.test/catalogs/3"
        );
    }

    #[test]
    fn endpoint_helpers_embed_ids() {
        assert_eq!(endpoints::catalog(9), "/catalogs/9");
        assert_eq!(endpoints::wishlist(9), "/wishlists/9");
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
