use crate::components::use_bundle;
use crate::routes::Route;
use aksaraya_client::assets::cover_url;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogCardProps {
    pub id: u64,
    pub title: AttrValue,
    pub author: AttrValue,
    pub cover: AttrValue,
    pub base_url: AttrValue,
}

#[function_component(CatalogCard)]
pub(crate) fn catalog_card(props: &CatalogCardProps) -> Html {
    let bundle = use_bundle();
    let alt = bundle.format(
        "catalog.cover_alt",
        "{title}",
        &[("title", props.title.to_string())],
    );
    html! {
        <Link<Route> to={Route::CatalogDetail { id: props.id }} classes="card catalog-card">
            <figure>
                <img src={cover_url(&props.base_url, &props.cover)} {alt} loading="lazy" />
            </figure>
            <div class="card-body">
                <h3 class="card-title">{props.title.clone()}</h3>
                <p class="muted">{props.author.clone()}</p>
            </div>
        </Link<Route>>
    }
}

/// Placeholder card shown while a page loads.
#[function_component(CatalogCardSkeleton)]
pub(crate) fn catalog_card_skeleton() -> Html {
    html! {
        <div class="card catalog-card skeleton" aria-hidden="true">
            <div class="skeleton cover" />
            <div class="card-body">
                <div class="skeleton line" />
                <div class="skeleton line short" />
            </div>
        </div>
    }
}
