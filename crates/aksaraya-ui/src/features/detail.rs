//! Catalog detail page with the wishlist toggle.
//!
//! # Design
//! - A failed fetch sends the visitor back to the browser.
//! - The toggle button is disabled while a request is in flight, so one
//!   click flips membership at most once.

use crate::app::api::use_api;
use crate::app::session::{SessionAction, session_store, use_session};
use crate::components::use_bundle;
use crate::routes::Route;
use aksaraya_api_models::{Catalog, CatalogId};
use aksaraya_client::api::CatalogApi;
use aksaraya_client::assets::cover_url;
use aksaraya_client::wishlist::toggle_wishlist;
use aksaraya_client::{ClientError, FallbackMessage};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogDetailProps {
    pub id: CatalogId,
}

#[function_component(CatalogDetailPage)]
pub(crate) fn catalog_detail_page(props: &CatalogDetailProps) -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let catalog = use_state(|| None::<Catalog>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let catalog = catalog.clone();
        let client = api.client.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                catalog.set(None);
                yew::platform::spawn_local(async move {
                    match client.get_catalog(id).await {
                        Ok(found) => catalog.set(Some(found)),
                        Err(err) => {
                            console::error!(format!("catalog {id} could not be loaded: {err}"));
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                    }
                });
                || ()
            },
            props.id,
        );
    }

    let Some(current) = (*catalog).clone() else {
        return html! {
            <p class="loading">{bundle.text("detail.loading", "Memuat katalog...")}</p>
        };
    };

    let saved = session
        .user()
        .is_some_and(|user| user.has_wishlisted(current.id));
    let on_toggle = {
        let client = api.client.clone();
        let session = session.clone();
        let busy = busy.clone();
        let error = error.clone();
        let fallback = bundle.text(
            FallbackMessage::Wishlist.key(),
            FallbackMessage::Wishlist.default_text(),
        );
        let catalog = current.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            busy.set(true);
            error.set(None);
            let client = client.clone();
            let session = session.clone();
            let busy = busy.clone();
            let error = error.clone();
            let fallback = fallback.clone();
            let catalog = catalog.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                let mut store = session_store();
                match toggle_wishlist(&*client, &mut store, &catalog).await {
                    Ok(_) => session.dispatch(SessionAction::Reload),
                    Err(ClientError::Unauthenticated) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message(&fallback))),
                }
                busy.set(false);
            });
        })
    };

    let toggle_label = if saved {
        bundle.text("detail.wishlist_remove", "Hapus dari wishlist")
    } else {
        bundle.text("detail.wishlist_add", "Tambah ke wishlist")
    };
    let row = |key: &str, value: &str| {
        html! {
            <div class="detail-row">
                <dt>{bundle.text(&format!("catalog.{key}"), key)}</dt>
                <dd>{ if value.trim().is_empty() { "-".to_string() } else { value.to_string() } }</dd>
            </div>
        }
    };

    html! {
        <article class="catalog-detail">
            <img
                class="cover"
                src={cover_url(api.client.base_url(), &current.cover_url)}
                alt={current.title.clone()}
            />
            <div class="stack">
                <h1>{current.title.clone()}</h1>
                <dl>
                    {row("author", &current.author)}
                    {row("publisher", &current.publisher)}
                    {row("year", &current.year.to_string())}
                    {row("genre", &current.genre)}
                    {row("type", &current.kind)}
                </dl>
                <h2>{bundle.text("catalog.synopsis", "Sinopsis")}</h2>
                <p class="synopsis">{current.synopsis.clone()}</p>
                <button
                    class={classes!("btn", if saved { "btn-outline" } else { "btn-primary" })}
                    disabled={*busy}
                    onclick={on_toggle}
                >
                    {toggle_label}
                </button>
                if let Some(message) = &*error {
                    <p class="error-text" role="alert">{message.clone()}</p>
                }
                <Link<Route> to={Route::Home} classes="btn btn-link">
                    {bundle.text("detail.back", "Kembali")}
                </Link<Route>>
            </div>
        </article>
    }
}
