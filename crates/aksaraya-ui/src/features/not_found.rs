use crate::components::use_bundle;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_bundle();
    html! {
        <section class="not-found hero">
            <h1>{"404"}</h1>
            <h2>{bundle.text("not_found.title", "Halaman tidak ditemukan")}</h2>
            <p class="muted">{bundle.text("not_found.body", "")}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {bundle.text("not_found.home", "Kembali ke beranda")}
            </Link<Route>>
        </section>
    }
}
