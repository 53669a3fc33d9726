//! Catalog browser: search box, genre sidebar, card grid, pager.
//!
//! # Design
//! - [`BrowseState`] lives in a `RefCell`; every load is split into
//!   `begin_load` and `finish_load` so no borrow is held across an await.
//! - Setters report whether a reload is needed; only then is a request sent.

use crate::app::api::use_api;
use crate::components::catalog_card::{CatalogCard, CatalogCardSkeleton};
use crate::components::genre_sidebar::GenreSidebar;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::components::use_bundle;
use aksaraya_client::browse::{BrowseState, BrowseView};
use aksaraya_client::query::fetch_page;
use yew::prelude::*;

#[function_component(BrowsePage)]
pub(crate) fn browse_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let state = use_mut_ref(|| BrowseState::new(api.config.page_limit()));
    let redraw = use_force_update();

    let load = {
        let client = api.client.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            let (ticket, query) = state.borrow_mut().begin_load();
            redraw.force_update();
            let client = client.clone();
            let state = state.clone();
            let redraw = redraw.clone();
            yew::platform::spawn_local(async move {
                let result = fetch_page(&*client, &query).await;
                state.borrow_mut().finish_load(ticket, result);
                redraw.force_update();
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            (),
        );
    }

    let on_search = {
        let state = state.clone();
        let load = load.clone();
        Callback::from(move |keyword: String| {
            if state.borrow_mut().set_keyword(&keyword) {
                load.emit(());
            }
        })
    };
    let on_genre = {
        let state = state.clone();
        let load = load.clone();
        Callback::from(move |genre: Option<String>| {
            let changed = match genre {
                Some(genre) => state.borrow_mut().toggle_genre(&genre),
                None => state.borrow_mut().set_genre(None),
            };
            if changed {
                load.emit(());
            }
        })
    };
    let on_page = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            if state.borrow_mut().set_page(page) {
                load.emit(());
            }
        })
    };

    let current = state.borrow();
    let base_url: AttrValue = api.client.base_url().to_string().into();
    let grid = match current.view() {
        BrowseView::Skeleton => {
            let count = api.config.page_limit();
            html! {
                <div class="catalog-grid">
                    { for (0..count).map(|_| html! { <CatalogCardSkeleton /> }) }
                </div>
            }
        }
        BrowseView::Empty => html! {
            <p class="empty-state">{bundle.text("browse.empty", "Tidak ada katalog ditemukan.")}</p>
        },
        BrowseView::Grid { cards, pagination } => html! {
            <>
                <div class="catalog-grid">
                    { for cards.iter().map(|catalog| html! {
                        <CatalogCard
                            key={catalog.id}
                            id={catalog.id}
                            title={catalog.title.clone()}
                            author={catalog.author.clone()}
                            cover={catalog.cover_url.clone()}
                            base_url={base_url.clone()}
                        />
                    }) }
                </div>
                <Pagination control={pagination} {on_page} />
            </>
        },
    };

    html! {
        <section class="browse layout-with-sidebar">
            <GenreSidebar
                selected={current.genre().map(|genre| AttrValue::from(genre.to_string()))}
                on_select={on_genre}
            />
            <div class="browse-main">
                <h1>{bundle.text("browse.title", "Jelajahi katalog")}</h1>
                <SearchInput
                    value={current.keyword().to_string()}
                    placeholder={bundle.text("browse.search_placeholder", "Cari...")}
                    aria_label={bundle.text("browse.search_label", "Cari katalog")}
                    debounce_ms={api.config.search_debounce_ms()}
                    {on_search}
                />
                {grid}
            </div>
        </section>
    }
}
