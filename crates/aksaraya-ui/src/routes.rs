//! Route table and per-route access rules.

use aksaraya_api_models::{CatalogId, User, UserRole};
use aksaraya_client::guard::{Access, GuardDecision, guard, guest_only};
use yew_router::prelude::*;

/// Every page of the front-end.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Catalog browser.
    #[at("/")]
    Home,
    /// Login form.
    #[at("/login")]
    Login,
    /// Registration form.
    #[at("/register")]
    Register,
    /// Current user and their wishlist.
    #[at("/profile")]
    Profile,
    /// One catalog entry.
    #[at("/catalogs/:id")]
    CatalogDetail {
        /// Catalog id.
        id: CatalogId,
    },
    /// Admin CRUD dashboard.
    #[at("/dashboard")]
    Dashboard,
    /// Fallback page.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may open a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteGate {
    /// Checked against the session with [`guard`].
    Requires(Access),
    /// Only for visitors without a session.
    GuestOnly,
}

impl Route {
    /// Access rule of this route.
    #[must_use]
    pub const fn gate(&self) -> RouteGate {
        match self {
            Self::Login | Self::Register => RouteGate::GuestOnly,
            Self::Profile => RouteGate::Requires(Access::Authenticated),
            Self::Dashboard => RouteGate::Requires(Access::Role(UserRole::Admin)),
            Self::Home | Self::CatalogDetail { .. } | Self::NotFound => {
                RouteGate::Requires(Access::Public)
            }
        }
    }

    /// Decide whether `user` may see this route.
    #[must_use]
    pub fn decide(&self, user: Option<&User>) -> GuardDecision {
        match self.gate() {
            RouteGate::Requires(access) => guard(user, access),
            RouteGate::GuestOnly => guest_only(user),
        }
    }

    /// Where a redirect decision sends the visitor.
    #[must_use]
    pub const fn redirect_target(decision: GuardDecision) -> Option<Self> {
        match decision {
            GuardDecision::Allow => None,
            GuardDecision::RedirectLogin => Some(Self::Login),
            GuardDecision::RedirectHome => Some(Self::Home),
        }
    }
}
