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
//! DOM-free client core for the Aksaraya catalog.
//!
//! Everything here runs unchanged in the browser (behind the Yew front-end)
//! and natively (behind the CLI). Transports plug in through [`api::CatalogApi`]
//! and session persistence through [`session::SessionPersistence`].
//!
//! Layout:
//! - `api.rs`: the API port and endpoint paths
//! - `session.rs`: session store and persistence port
//! - `query.rs`: catalog search query construction
//! - `browse.rs`: browse view state machine
//! - `wishlist.rs`: wishlist toggle
//! - `admin.rs`: admin dashboard state and CRUD flows
//! - `form.rs`: catalog form drafts and validation
//! - `guard.rs`: route access decisions

pub mod admin;
pub mod api;
pub mod assets;
pub mod auth;
pub mod browse;
pub mod config;
pub mod error;
pub mod form;
pub mod guard;
pub mod outcome;
pub mod pagination;
pub mod query;
pub mod session;
pub mod wishlist;

pub use api::CatalogApi;
pub use error::{ClientError, ClientResult};
pub use outcome::{ApiOutcome, FallbackMessage};
pub use session::{MemoryPersistence, SessionPersistence, SessionSnapshot, SessionStore};
