//! Browser-side services.

pub(crate) mod api;
pub(crate) mod storage;
