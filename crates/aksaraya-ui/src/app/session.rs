//! Session context for the component tree.
//!
//! # Design
//! - `localStorage` is the source of truth; the reducer only mirrors it.
//! - Async flows restore their own [`SessionStore`], mutate it through the
//!   core, then dispatch [`SessionAction::Reload`] so no borrow spans an await.

use std::rc::Rc;

use aksaraya_api_models::User;
use aksaraya_client::{SessionSnapshot, SessionStore};
use gloo::console;
use yew::prelude::*;

use crate::services::storage::BrowserStorage;

/// Rendered copy of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SessionModel {
    snapshot: SessionSnapshot,
}

pub(crate) enum SessionAction {
    /// Re-read the persisted session.
    Reload,
    /// Clear the session everywhere.
    Logout,
}

impl SessionModel {
    pub(crate) fn restore() -> Self {
        Self {
            snapshot: session_store().snapshot(),
        }
    }

    pub(crate) fn user(&self) -> Option<&User> {
        self.snapshot.user.as_ref()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.snapshot.token.as_deref()
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.role.is_admin())
    }
}

impl Reducible for SessionModel {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Reload => Rc::new(Self::restore()),
            SessionAction::Logout => {
                let mut store = session_store();
                if let Err(err) = store.logout() {
                    console::warn!(format!("session storage not cleared: {err}"));
                }
                Rc::new(Self {
                    snapshot: store.snapshot(),
                })
            }
        }
    }
}

pub(crate) type SessionCtx = UseReducerHandle<SessionModel>;

/// Session store over `localStorage`, restored from whatever is stored now.
pub(crate) fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::restore(BrowserStorage)
}

/// Current session context; an empty session outside the provider.
#[hook]
pub(crate) fn use_session() -> SessionCtx {
    let fallback = use_reducer(SessionModel::default);
    use_context::<SessionCtx>().unwrap_or(fallback)
}
