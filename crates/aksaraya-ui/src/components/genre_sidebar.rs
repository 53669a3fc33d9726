//! Genre filter sidebar.

use crate::components::use_bundle;
use aksaraya_api_models::vocabulary::GENRES;
use aksaraya_client::browse::{COLLAPSED_GENRE_COUNT, visible_genres};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GenreSidebarProps {
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    /// `None` clears the filter; `Some(genre)` toggles it.
    pub on_select: Callback<Option<String>>,
}

#[function_component(GenreSidebar)]
pub(crate) fn genre_sidebar(props: &GenreSidebarProps) -> Html {
    let bundle = use_bundle();
    let show_all = use_state(|| false);

    let toggle_all = {
        let show_all = show_all.clone();
        Callback::from(move |_| show_all.set(!*show_all))
    };
    let clear = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(None))
    };

    let items = visible_genres(&GENRES, *show_all).iter().map(|genre| {
        let active = props.selected.as_deref() == Some(*genre);
        let onclick = {
            let on_select = props.on_select.clone();
            let genre = (*genre).to_string();
            Callback::from(move |_| on_select.emit(Some(genre.clone())))
        };
        html! {
            <li>
                <button class={classes!("menu-item", active.then_some("active"))} {onclick}>
                    {*genre}
                </button>
            </li>
        }
    });

    html! {
        <aside class="genre-sidebar">
            <h2>{bundle.text("browse.genres", "Genre")}</h2>
            <ul class="menu">
                <li>
                    <button
                        class={classes!("menu-item", props.selected.is_none().then_some("active"))}
                        onclick={clear}
                    >
                        {bundle.text("browse.all_genres", "Semua genre")}
                    </button>
                </li>
                { for items }
            </ul>
            if GENRES.len() > COLLAPSED_GENRE_COUNT {
                <button class="btn btn-link" onclick={toggle_all}>
                    { if *show_all {
                        bundle.text("browse.show_less", "Sembunyikan")
                    } else {
                        bundle.text("browse.show_more", "Lihat semua")
                    } }
                </button>
            }
        </aside>
    }
}
