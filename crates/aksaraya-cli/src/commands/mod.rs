//! Command handlers grouped by concern.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod catalogs;
pub(crate) mod wishlist;
