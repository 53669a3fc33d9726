//! Route guard wrapper.

use crate::app::session::use_session;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RouteGuardProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Children,
}

/// Render `children` when the session may open `route`; redirect otherwise.
#[function_component(RouteGuard)]
pub(crate) fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session();
    let decision = props.route.decide(session.user());
    match Route::redirect_target(decision) {
        Some(target) => html! { <Redirect<Route> to={target} /> },
        None => html! { <>{ for props.children.iter() }</> },
    }
}
