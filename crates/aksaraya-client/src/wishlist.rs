//! Wishlist toggle.
//!
//! # Design
//! - Membership is read from the session user; the request method follows it
//!   (`POST` when absent, `DELETE` when present).
//! - The session user is updated only after the backend accepts the change,
//!   so one click flips membership at most once.
//! - Failures are logged and returned; there is nothing to roll back.

use aksaraya_api_models::{Catalog, CatalogId, User, WishlistItem};

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};
use crate::session::{SessionPersistence, SessionStore};

/// Which wishlist request a toggle issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistAction {
    /// `POST /wishlists/:id`.
    Add,
    /// `DELETE /wishlists/:id`.
    Remove,
}

impl WishlistAction {
    /// Action that toggles `catalog_id` for `user`.
    #[must_use]
    pub fn for_user(user: &User, catalog_id: CatalogId) -> Self {
        if user.has_wishlisted(catalog_id) {
            Self::Remove
        } else {
            Self::Add
        }
    }

    /// HTTP method used by the action.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Add => "POST",
            Self::Remove => "DELETE",
        }
    }

    /// Send the request through `api`.
    ///
    /// # Errors
    ///
    /// Propagates the transport error.
    pub async fn send<A>(self, api: &A, token: &str, catalog_id: CatalogId) -> ClientResult<()>
    where
        A: CatalogApi + ?Sized,
    {
        match self {
            Self::Add => api.add_to_wishlist(token, catalog_id).await,
            Self::Remove => api.remove_from_wishlist(token, catalog_id).await,
        }
    }

    /// Apply an accepted action to `user`'s wishlist.
    pub fn apply(self, user: &mut User, catalog: &Catalog) {
        match self {
            Self::Add => {
                if !user.has_wishlisted(catalog.id) {
                    user.wishlists.push(WishlistItem::from(catalog));
                }
            }
            Self::Remove => user.wishlists.retain(|item| item.id != catalog.id),
        }
    }
}

/// A toggle ready to send: the chosen action plus the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistPlan {
    /// Request to issue.
    pub action: WishlistAction,
    /// Bearer token for the request.
    pub token: String,
}

/// Decide the toggle for `catalog_id` from the current session.
///
/// # Errors
///
/// Returns [`ClientError::Unauthenticated`] when nobody is logged in; the UI
/// sends the visitor to the login page in that case.
pub fn plan_toggle<P: SessionPersistence>(
    session: &SessionStore<P>,
    catalog_id: CatalogId,
) -> ClientResult<WishlistPlan> {
    let user = session.user().ok_or(ClientError::Unauthenticated)?;
    let token = session.require_token()?;
    Ok(WishlistPlan {
        action: WishlistAction::for_user(user, catalog_id),
        token,
    })
}

/// Record an accepted toggle on the session user and persist it.
///
/// # Errors
///
/// Returns the persistence error.
pub fn apply_toggle<P: SessionPersistence>(
    session: &mut SessionStore<P>,
    action: WishlistAction,
    catalog: &Catalog,
) -> ClientResult<()> {
    session.update_user(|user| action.apply(user, catalog))?;
    Ok(())
}

/// Toggle `catalog` in the session user's wishlist.
///
/// # Errors
///
/// Returns [`ClientError::Unauthenticated`] without a session, or the
/// transport error; membership is unchanged on error.
pub async fn toggle_wishlist<A, P>(
    api: &A,
    session: &mut SessionStore<P>,
    catalog: &Catalog,
) -> ClientResult<WishlistAction>
where
    A: CatalogApi + ?Sized,
    P: SessionPersistence,
{
    let plan = plan_toggle(session, catalog.id)?;
    if let Err(err) = plan.action.send(api, &plan.token, catalog.id).await {
        tracing::error!(error = %err, catalog_id = catalog.id, "wishlist update failed");
        return Err(err);
    }
    apply_toggle(session, plan.action, catalog)?;
    Ok(plan.action)
}
