//! Application shell: providers, router, and startup session refresh.

use crate::components::guard::RouteGuard;
use crate::components::navbar::Navbar;
use crate::features::admin::AdminDashboardPage;
use crate::features::auth::{LoginPage, RegisterPage};
use crate::features::browse::BrowsePage;
use crate::features::detail::CatalogDetailPage;
use crate::features::not_found::NotFoundPage;
use crate::features::profile::ProfilePage;
use crate::i18n::TranslationBundle;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod session;

use api::ApiCtx;
use preferences::{client_config, load_locale, persist_locale};
use session::{SessionAction, SessionModel, session_store};

#[function_component(AksarayaApp)]
fn aksaraya_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let api_ctx = use_memo(|_| ApiCtx::new(client_config()), ());
    let session = use_reducer(SessionModel::restore);

    {
        let locale = *locale;
        use_effect_with_deps(
            move |locale| {
                persist_locale(*locale);
                || ()
            },
            locale,
        );
    }
    {
        let client = api_ctx.client.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let mut store = session_store();
                    if store.refresh_user(&*client).await.is_some() {
                        session.dispatch(SessionAction::Reload);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next| locale.set(next))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <ContextProvider<session::SessionCtx> context={session}>
                    <BrowserRouter>
                        <Navbar locale={*locale} {on_locale} />
                        <main class="container">
                            <Switch<Route> render={switch} />
                        </main>
                    </BrowserRouter>
                </ContextProvider<session::SessionCtx>>
            </ContextProvider<ApiCtx>>
        </ContextProvider<TranslationBundle>>
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <BrowsePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::CatalogDetail { id } => html! { <CatalogDetailPage id={*id} /> },
        Route::Dashboard => html! { <AdminDashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! { <RouteGuard {route}>{page}</RouteGuard> }
}

/// Mount the application on the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<AksarayaApp>::new().render();
}
