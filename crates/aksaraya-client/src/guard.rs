//! Route access decisions.
//!
//! Views declare an [`Access`] requirement; [`guard`] turns the current user
//! into a redirect decision. The UI and the CLI both consult it.

use aksaraya_api_models::{User, UserRole};

/// Access requirement of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// A logged-in user with exactly this role.
    Role(UserRole),
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the route.
    Allow,
    /// Nobody is logged in; go to `/login`.
    RedirectLogin,
    /// Logged in without the required role; go to `/`.
    RedirectHome,
}

/// Decide whether `user` may see a route requiring `access`.
#[must_use]
pub fn guard(user: Option<&User>, access: Access) -> GuardDecision {
    match (access, user) {
        (Access::Public, _) => GuardDecision::Allow,
        (_, None) => GuardDecision::RedirectLogin,
        (Access::Authenticated, Some(_)) => GuardDecision::Allow,
        (Access::Role(role), Some(user)) if user.role == role => GuardDecision::Allow,
        (Access::Role(_), Some(_)) => GuardDecision::RedirectHome,
    }
}

/// Login and register pages: send an already logged-in user home.
#[must_use]
pub const fn guest_only(user: Option<&User>) -> GuardDecision {
    if user.is_some() {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Allow
    }
}
