//! Page-level views, one per route.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod browse;
pub(crate) mod detail;
pub(crate) mod not_found;
pub(crate) mod profile;
