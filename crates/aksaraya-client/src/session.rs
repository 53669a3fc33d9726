//! Session store and its persistence port.
//!
//! # Design
//! - The store is an explicit object owned by whoever renders; nothing global.
//! - Every state change writes through to the injected [`SessionPersistence`]
//!   so the in-memory session and the persisted copy mirror each other.
//! - Refresh failures never raise: callers get `None` and the prior state stays.

use std::cell::RefCell;
use std::rc::Rc;

use aksaraya_api_models::{User, UserRole};
use serde::{Deserialize, Serialize};

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};

/// Persisted form of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Logged-in account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// A snapshot counts only when both token and user are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Durable storage for the session (browser storage, a file, memory).
pub trait SessionPersistence {
    /// Read the stored snapshot; an empty store yields the default snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the backing store cannot be read.
    fn load(&self) -> ClientResult<SessionSnapshot>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the backing store rejects the write.
    fn save(&self, snapshot: &SessionSnapshot) -> ClientResult<()>;

    /// Remove every stored session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the backing store rejects the delete.
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory persistence; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<SessionSnapshot>>,
}

impl MemoryPersistence {
    /// Start with `snapshot` already stored.
    #[must_use]
    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            slot: Rc::new(RefCell::new(snapshot)),
        }
    }

    /// Current stored value.
    #[must_use]
    pub fn stored(&self) -> SessionSnapshot {
        self.slot.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> ClientResult<SessionSnapshot> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> ClientResult<()> {
        *self.slot.borrow_mut() = snapshot.clone();
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot.borrow_mut() = SessionSnapshot::default();
        Ok(())
    }
}

/// Client-held view of the logged-in user and their token.
#[derive(Debug)]
pub struct SessionStore<P> {
    persistence: P,
    token: Option<String>,
    user: Option<User>,
}

impl<P: SessionPersistence> SessionStore<P> {
    /// Empty session backed by `persistence`; nothing is read.
    pub const fn new(persistence: P) -> Self {
        Self {
            persistence,
            token: None,
            user: None,
        }
    }

    /// Rebuild the session from persistence.
    ///
    /// Unreadable or half-written snapshots start an empty session.
    pub fn restore(persistence: P) -> Self {
        let snapshot = match persistence.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "stored session unreadable; starting signed out");
                SessionSnapshot::default()
            }
        };
        if snapshot.is_complete() {
            Self {
                persistence,
                token: snapshot.token,
                user: snapshot.user,
            }
        } else {
            Self::new(persistence)
        }
    }

    /// Logged-in account, if any.
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Bearer token or [`ClientError::Unauthenticated`].
    ///
    /// # Errors
    ///
    /// Fails when no session is active.
    pub fn require_token(&self) -> ClientResult<String> {
        self.token
            .clone()
            .ok_or(ClientError::Unauthenticated)
    }

    /// Whether a user is logged in.
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the logged-in user.
    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|user| &user.role)
    }

    /// Whether the logged-in user administers the catalog.
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(UserRole::is_admin)
    }

    /// Store `token` and `user` and make them current.
    ///
    /// # Errors
    ///
    /// Returns the persistence error; the in-memory session is left unchanged.
    pub fn login(&mut self, user: User, token: String) -> ClientResult<()> {
        let snapshot = SessionSnapshot {
            token: Some(token),
            user: Some(user),
        };
        self.persistence.save(&snapshot)?;
        self.token = snapshot.token;
        self.user = snapshot.user;
        tracing::debug!("session started");
        Ok(())
    }

    /// Drop the session and its persisted copy.
    ///
    /// The in-memory session is cleared even if the persisted copy cannot be.
    ///
    /// # Errors
    ///
    /// Returns the persistence error after clearing memory.
    pub fn logout(&mut self) -> ClientResult<()> {
        self.token = None;
        self.user = None;
        tracing::debug!("session cleared");
        self.persistence.clear()
    }

    /// Replace the current user and persist it alongside the existing token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthenticated`] without a token, or the persistence error.
    pub fn set_user(&mut self, user: User) -> ClientResult<()> {
        let token = self.require_token()?;
        let snapshot = SessionSnapshot {
            token: Some(token),
            user: Some(user),
        };
        self.persistence.save(&snapshot)?;
        self.user = snapshot.user;
        Ok(())
    }

    /// Mutate the current user in place and persist the result.
    ///
    /// Returns `false` when no user is logged in.
    ///
    /// # Errors
    ///
    /// Returns the persistence error.
    pub fn update_user(&mut self, apply: impl FnOnce(&mut User)) -> ClientResult<bool> {
        let Some(mut user) = self.user.clone() else {
            return Ok(false);
        };
        apply(&mut user);
        self.set_user(user)?;
        Ok(true)
    }

    /// Re-fetch the user with the stored token and replace local state.
    ///
    /// Returns `None` when there is no token or the server rejects it; the
    /// session keeps whatever state it had.
    pub async fn refresh_user<A>(&mut self, api: &A) -> Option<User>
    where
        A: CatalogApi + ?Sized,
    {
        let token = self.token.clone()?;
        match api.current_user(&token).await {
            Ok(user) => {
                self.apply_refreshed(user.clone());
                Some(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "session refresh failed");
                None
            }
        }
    }

    /// Install a freshly fetched user, logging (not raising) persistence failures.
    pub fn apply_refreshed(&mut self, user: User) {
        if let Err(err) = self.set_user(user) {
            tracing::warn!(error = %err, "refreshed user not persisted");
        }
    }

    /// Snapshot of the in-memory state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token.clone(),
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> User {
        User {
            id: 1,
            name: "Rina".into(),
            email: "rina@example.com".into(),
            role: UserRole::User,
            nik: None,
            phone: None,
            wishlists: Vec::new(),
        }
    }

    #[test]
    fn login_persists_token_and_user() {
        let persistence = MemoryPersistence::default();
        let mut store = SessionStore::new(persistence.clone());
        store.login(reader(), "tok".into()).expect("login");
        assert_eq!(store.token(), Some("tok"));
        assert_eq!(persistence.stored(), store.snapshot());
        assert!(persistence.stored().is_complete());
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let persistence = MemoryPersistence::default();
        let mut store = SessionStore::new(persistence.clone());
        store.login(reader(), "tok".into()).expect("login");
        store.logout().expect("logout");
        assert!(store.user().is_none());
        assert!(store.token().is_none());
        assert_eq!(persistence.stored(), SessionSnapshot::default());
    }

    #[test]
    fn restore_ignores_half_written_snapshots() {
        let persistence = MemoryPersistence::with_snapshot(SessionSnapshot {
            token: Some("tok".into()),
            user: None,
        });
        let store = SessionStore::restore(persistence);
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn restore_rehydrates_complete_snapshot() {
        let persistence = MemoryPersistence::with_snapshot(SessionSnapshot {
            token: Some("tok".into()),
            user: Some(reader()),
        });
        let store = SessionStore::restore(persistence);
        assert_eq!(store.user().map(|user| user.id), Some(1));
        assert!(!store.is_admin());
    }

    #[test]
    fn set_user_requires_session() {
        let mut store = SessionStore::new(MemoryPersistence::default());
        assert_eq!(store.set_user(reader()), Err(ClientError::Unauthenticated));
    }

    #[test]
    fn update_user_writes_through() {
        let persistence = MemoryPersistence::default();
        let mut store = SessionStore::new(persistence.clone());
        store.login(reader(), "tok".into()).expect("login");
        let changed = store
            .update_user(|user| user.name = "Rina S.".into())
            .expect("update");
        assert!(changed);
        assert_eq!(
            persistence.stored().user.map(|user| user.name),
            Some("Rina S.".to_string())
        );
    }
}
