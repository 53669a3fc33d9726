#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Aksaraya catalog API.
//!
//! These types are re-used by the web UI and the CLI for request/response
//! encoding so both surfaces agree on the wire contract. Field names follow
//! the backend's camelCase JSON.
use serde::{Deserialize, Serialize};

pub mod vocabulary;

/// Numeric identifier assigned to catalog entries by the backend.
pub type CatalogId = u64;

/// Numeric identifier assigned to users by the backend.
pub type UserId = u64;

/// A single book record as served by `/catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Backend identifier.
    pub id: CatalogId,
    /// Cover image path, relative to the API base URL.
    #[serde(default)]
    pub cover_url: String,
    /// Book title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Genre label (see [`vocabulary::GENRES`]).
    pub genre: String,
    /// Publication year.
    pub year: i32,
    /// Free-form synopsis.
    #[serde(default)]
    pub synopsis: String,
    /// Publisher name.
    #[serde(default)]
    pub publisher: String,
    #[serde(rename = "type")]
    /// Media type (see [`vocabulary::CATALOG_TYPES`]).
    pub kind: String,
}

/// Denormalised catalog projection embedded in [`User::wishlists`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Catalog identifier.
    pub id: CatalogId,
    /// Cover image path, relative to the API base URL.
    #[serde(default)]
    pub cover_url: String,
    /// Book title.
    pub title: String,
    /// Author display name.
    pub author: String,
}

impl From<&Catalog> for WishlistItem {
    fn from(catalog: &Catalog) -> Self {
        Self {
            id: catalog.id,
            cover_url: catalog.cover_url.clone(),
            title: catalog.title.clone(),
            author: catalog.author.clone(),
        }
    }
}

/// Account role returned by the backend.
///
/// Roles this client has no behaviour for are kept verbatim so a stored
/// session writes back exactly what the backend sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// Regular reader account.
    #[default]
    User,
    /// Catalog administrator.
    Admin,
    /// Any other role string, e.g. `librarian`.
    Other(String),
}

impl UserRole {
    /// Wire representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Other(role) => role,
        }
    }

    /// Whether this role administers the catalog.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for UserRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            _ => Self::Other(role),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

/// Authenticated account as returned by `/auth/login` and `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: UserRole,
    #[serde(rename = "NIK", default, skip_serializing_if = "Option::is_none")]
    /// National identity number, staff accounts only.
    pub nik: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Contact phone number, staff accounts only.
    pub phone: Option<String>,
    #[serde(default)]
    /// Saved catalog entries.
    pub wishlists: Vec<WishlistItem>,
}

impl User {
    /// Whether `catalog_id` is present in the user's wishlist.
    #[must_use]
    pub fn has_wishlisted(&self, catalog_id: CatalogId) -> bool {
        self.wishlists.iter().any(|item| item.id == catalog_id)
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account e-mail.
    pub email: String,
    /// Plain-text password (sent over TLS).
    pub password: String,
}

/// Payload posted to `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account e-mail.
    pub email: String,
    /// Plain-text password (sent over TLS).
    pub password: String,
}

/// Successful `/auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Authenticated account.
    pub user: User,
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// `/auth/me` body: the user either bare or wrapped in `{"user": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CurrentUserResponse {
    /// `{"user": {...}}`.
    Wrapped {
        /// The account.
        user: User,
    },
    /// The account object itself.
    Bare(User),
}

impl CurrentUserResponse {
    /// The account, whichever shape it arrived in.
    #[must_use]
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// One page of `/catalogs/search` results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    /// Entries on this page.
    pub data: Vec<Catalog>,
    /// Last available page number (1-based).
    pub last_page: u32,
}

/// Full `/catalogs` listing used by the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogList {
    /// Every catalog entry.
    pub catalogs: Vec<Catalog>,
}

/// Error document returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable message, shown to the user verbatim when present.
    pub message: Option<String>,
}

/// Sort direction accepted by `/catalogs/search`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decodes_backend_casing() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Sari",
            "email": "sari@example.com",
            "role": "admin",
            "NIK": "3201",
            "wishlists": [
                {"id": 3, "coverUrl": "/uploads/3.jpg", "title": "Laskar Pelangi", "author": "Andrea Hirata"}
            ]
        }))
        .expect("user payload");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.nik.as_deref(), Some("3201"));
        assert!(user.phone.is_none());
        assert!(user.has_wishlisted(3));
        assert!(!user.has_wishlisted(4));
    }

    #[test]
    fn unknown_role_and_missing_wishlist_are_tolerated() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Budi",
            "email": "budi@example.com",
            "role": "librarian"
        }))
        .expect("user payload");
        assert_eq!(user.role, UserRole::Other("librarian".into()));
        assert!(!user.role.is_admin());
        assert!(user.wishlists.is_empty());
    }

    #[test]
    fn unrecognised_role_is_written_back_verbatim() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Sari",
            "email": "sari@example.com",
            "role": "librarian",
            "wishlists": []
        }))
        .expect("user payload");
        let stored = serde_json::to_value(&user).expect("encode");
        assert_eq!(stored["role"], "librarian");
        let restored: User = serde_json::from_value(stored).expect("stored payload");
        assert_eq!(restored, user);
        assert_eq!(restored.role.as_str(), "librarian");
    }

    #[test]
    fn catalog_type_field_maps_to_kind() {
        let catalog: Catalog = serde_json::from_value(json!({
            "id": 1,
            "coverUrl": "/uploads/1.jpg",
            "title": "Bumi Manusia",
            "author": "Pramoedya Ananta Toer",
            "genre": "Sejarah",
            "year": 1980,
            "synopsis": "Minke",
            "publisher": "Hasta Mitra",
            "type": "Cetak"
        }))
        .expect("catalog payload");
        assert_eq!(catalog.kind, "Cetak");
        let encoded = serde_json::to_value(&catalog).expect("encode");
        assert_eq!(encoded["type"], "Cetak");
        assert_eq!(encoded["coverUrl"], "/uploads/1.jpg");
    }

    #[test]
    fn current_user_accepts_both_shapes() {
        let bare: CurrentUserResponse = serde_json::from_value(json!({
            "id": 2, "name": "Ayu", "email": "ayu@example.com", "role": "user"
        }))
        .expect("bare payload");
        let wrapped: CurrentUserResponse = serde_json::from_value(json!({
            "user": {"id": 2, "name": "Ayu", "email": "ayu@example.com", "role": "user"}
        }))
        .expect("wrapped payload");
        assert_eq!(bare.into_user(), wrapped.into_user());
    }

    #[test]
    fn catalog_page_uses_last_page_key() {
        let page: CatalogPage =
            serde_json::from_value(json!({"data": [], "lastPage": 4})).expect("page payload");
        assert_eq!(page.last_page, 4);
    }
}
