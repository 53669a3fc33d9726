//! Profile page: account details and the wishlist grid.

use crate::app::api::use_api;
use crate::app::session::{SessionAction, session_store, use_session};
use crate::components::catalog_card::CatalogCard;
use crate::components::use_bundle;
use aksaraya_api_models::UserRole;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let session = use_session();
    let refreshing = use_state(|| false);

    let on_refresh = {
        let client = api.client.clone();
        let session = session.clone();
        let refreshing = refreshing.clone();
        Callback::from(move |_| {
            let client = client.clone();
            let session = session.clone();
            let refreshing = refreshing.clone();
            refreshing.set(true);
            yew::platform::spawn_local(async move {
                let mut store = session_store();
                if store.refresh_user(&*client).await.is_some() {
                    session.dispatch(SessionAction::Reload);
                }
                refreshing.set(false);
            });
        })
    };

    // The route guard keeps visitors without a session away from here.
    let Some(user) = session.user() else {
        return html! {};
    };
    let staff = user.role != UserRole::User;
    let or_dash = |value: Option<&String>| {
        value
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| "-".to_string(), Clone::clone)
    };
    let base_url: AttrValue = api.client.base_url().to_string().into();

    html! {
        <section class="profile stack">
            <header class="profile-header">
                <h1>{bundle.text("profile.title", "Profil")}</h1>
                <button class="btn btn-ghost" disabled={*refreshing} onclick={on_refresh}>
                    {bundle.text("profile.refresh", "Muat ulang")}
                </button>
            </header>
            <dl class="profile-details">
                <dt>{bundle.text("auth.name", "Nama")}</dt>
                <dd>{user.name.clone()}</dd>
                <dt>{bundle.text("auth.email", "Email")}</dt>
                <dd>{user.email.clone()}</dd>
                if staff {
                    <dt>{bundle.text("profile.role", "Peran")}</dt>
                    <dd><span class="badge">{user.role.as_str().to_uppercase()}</span></dd>
                    <dt>{bundle.text("profile.nik", "NIK")}</dt>
                    <dd>{or_dash(user.nik.as_ref())}</dd>
                    <dt>{bundle.text("profile.phone", "Nomor telepon")}</dt>
                    <dd>{or_dash(user.phone.as_ref())}</dd>
                }
            </dl>
            <h2>{bundle.text("profile.wishlist", "Wishlist")}</h2>
            if user.wishlists.is_empty() {
                <p class="empty-state">{bundle.text("profile.wishlist_empty", "Wishlist masih kosong.")}</p>
            } else {
                <div class="catalog-grid">
                    { for user.wishlists.iter().map(|item| html! {
                        <CatalogCard
                            key={item.id}
                            id={item.id}
                            title={item.title.clone()}
                            author={item.author.clone()}
                            cover={item.cover_url.clone()}
                            base_url={base_url.clone()}
                        />
                    }) }
                </div>
            }
        </section>
    }
}
