use crate::app::session::{SessionAction, use_session};
use crate::components::use_bundle;
use crate::i18n::LocaleCode;
use crate::routes::Route;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub locale: LocaleCode,
    pub on_locale: Callback<LocaleCode>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let bundle = use_bundle();
    let session = use_session();
    let navigator = use_navigator();
    let t = |key: &str, default: &str| bundle.text(key, default);

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };
    let on_locale = {
        let on_locale = props.on_locale.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    on_locale.emit(locale);
                }
            }
        })
    };

    let account = match session.user() {
        Some(user) => html! {
            <>
                if session.is_admin() {
                    <Link<Route> to={Route::Dashboard} classes="btn btn-ghost">
                        {t("nav.dashboard", "Dasbor")}
                    </Link<Route>>
                }
                <Link<Route> to={Route::Profile} classes="btn btn-ghost">
                    {user.name.clone()}
                </Link<Route>>
                <button class="btn btn-outline" onclick={on_logout}>{t("nav.logout", "Keluar")}</button>
            </>
        },
        None => html! {
            <>
                <Link<Route> to={Route::Login} classes="btn btn-ghost">{t("nav.login", "Masuk")}</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn btn-primary">
                    {t("nav.register", "Daftar")}
                </Link<Route>>
            </>
        },
    };

    html! {
        <header class="navbar">
            <Link<Route> to={Route::Home} classes="brand">{t("nav.brand", "Aksaraya")}</Link<Route>>
            <nav class="navbar-end">
                <Link<Route> to={Route::Home} classes="btn btn-ghost">{t("nav.home", "Beranda")}</Link<Route>>
                {account}
                <select class="select select-sm" aria-label="locale" onchange={on_locale}>
                    { for LocaleCode::all().into_iter().map(|locale| html! {
                        <option value={locale.code()} selected={locale == props.locale}>
                            {locale.label()}
                        </option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
