//! Sample backend records.

use aksaraya_api_models::{Catalog, CatalogId, CatalogPage, LoginResponse, User, UserRole, WishlistItem};

/// Token handed out by [`reader_login`].
pub const READER_TOKEN: &str = "reader-token";

/// Token handed out by [`admin_login`].
pub const ADMIN_TOKEN: &str = "admin-token";

/// A catalog entry with predictable fields derived from `id`.
#[must_use]
pub fn catalog(id: CatalogId) -> Catalog {
    Catalog {
        id,
        cover_url: format!("/uploads/cover-{id}.jpg"),
        title: format!("Buku {id}"),
        author: format!("Penulis {id}"),
        genre: "Fiksi".to_string(),
        year: 2000 + i32::try_from(id % 25).unwrap_or(0),
        synopsis: "Kisah tentang persahabatan dan mimpi.".to_string(),
        publisher: "Penerbit Nusantara".to_string(),
        kind: "Cetak".to_string(),
    }
}

/// Entries `1..=count`.
#[must_use]
pub fn catalogs(count: u64) -> Vec<Catalog> {
    (1..=count).map(catalog).collect()
}

/// Search page with `count` entries and the given `last_page`.
#[must_use]
pub fn catalog_page(count: u64, last_page: u32) -> CatalogPage {
    CatalogPage {
        data: catalogs(count),
        last_page,
    }
}

/// Regular reader whose wishlist holds `wishlisted`.
#[must_use]
pub fn reader(wishlisted: &[CatalogId]) -> User {
    User {
        id: 10,
        name: "Rina Pembaca".to_string(),
        email: "rina@example.com".to_string(),
        role: UserRole::User,
        nik: None,
        phone: None,
        wishlists: wishlisted
            .iter()
            .map(|id| WishlistItem::from(&catalog(*id)))
            .collect(),
    }
}

/// Catalog administrator with staff details.
#[must_use]
pub fn admin() -> User {
    User {
        id: 1,
        name: "Admin Perpustakaan".to_string(),
        email: "admin@example.com".to_string(),
        role: UserRole::Admin,
        nik: Some("3201010101010001".to_string()),
        phone: Some("081234567890".to_string()),
        wishlists: Vec::new(),
    }
}

/// Successful login payload for [`reader`].
#[must_use]
pub fn reader_login(wishlisted: &[CatalogId]) -> LoginResponse {
    LoginResponse {
        user: reader(wishlisted),
        token: READER_TOKEN.to_string(),
    }
}

/// Successful login payload for [`admin`].
#[must_use]
pub fn admin_login() -> LoginResponse {
    LoginResponse {
        user: admin(),
        token: ADMIN_TOKEN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_wishlist_matches_ids() {
        let user = reader(&[2, 5]);
        assert!(user.has_wishlisted(5));
        assert!(!user.has_wishlisted(3));
    }

    #[test]
    fn page_fixture_counts_entries() {
        assert_eq!(catalog_page(3, 2).data.len(), 3);
    }
}
