//! Login and registration pages.

use crate::app::api::use_api;
use crate::app::session::{SessionAction, session_store, use_session};
use crate::components::use_bundle;
use crate::routes::Route;
use aksaraya_api_models::{LoginRequest, RegisterRequest, UserRole};
use aksaraya_client::auth::{sign_in, sign_up};
use aksaraya_client::FallbackMessage;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Admins land on the dashboard, everyone else on the browser.
const fn landing(role: &UserRole) -> Route {
    if role.is_admin() {
        Route::Dashboard
    } else {
        Route::Home
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let onsubmit = {
        let client = api.client.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let fallback = bundle.text(FallbackMessage::Login.key(), FallbackMessage::Login.default_text());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            let fallback = fallback.clone();
            yew::platform::spawn_local(async move {
                let mut store = session_store();
                match sign_in(&*client, &mut store, &request).await {
                    Ok(user) => {
                        error.set(None);
                        session.dispatch(SessionAction::Reload);
                        if let Some(navigator) = navigator {
                            navigator.push(&landing(&user.role));
                        }
                    }
                    Err(err) => error.set(Some(err.user_message(&fallback))),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="auth-card card">
            <h1>{bundle.text("auth.login_title", "Masuk")}</h1>
            <form class="stack" {onsubmit}>
                <label>
                    <span>{bundle.text("auth.email", "Email")}</span>
                    <input type="email" autocomplete="email" value={(*email).clone()} oninput={bind(&email)} />
                </label>
                <label>
                    <span>{bundle.text("auth.password", "Kata sandi")}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                    />
                </label>
                if let Some(message) = &*error {
                    <p class="error-text" role="alert">{message.clone()}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*busy}>
                    { if *busy {
                        bundle.text("auth.busy", "Memproses...")
                    } else {
                        bundle.text("auth.submit_login", "Masuk")
                    } }
                </button>
            </form>
            <p class="muted">
                {bundle.text("auth.no_account", "Belum punya akun?")}{" "}
                <Link<Route> to={Route::Register}>{bundle.text("nav.register", "Daftar")}</Link<Route>>
            </p>
        </section>
    }
}

#[function_component(RegisterPage)]
pub(crate) fn register_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let onsubmit = {
        let client = api.client.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let fallback = bundle.text(
            FallbackMessage::Register.key(),
            FallbackMessage::Register.default_text(),
        );
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            let fallback = fallback.clone();
            yew::platform::spawn_local(async move {
                let mut store = session_store();
                match sign_up(&*client, &mut store, &request).await {
                    Ok(user) => {
                        error.set(None);
                        session.dispatch(SessionAction::Reload);
                        if let Some(navigator) = navigator {
                            navigator.push(&landing(&user.role));
                        }
                    }
                    Err(err) => error.set(Some(err.user_message(&fallback))),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="auth-card card">
            <h1>{bundle.text("auth.register_title", "Daftar akun")}</h1>
            <form class="stack" {onsubmit}>
                <label>
                    <span>{bundle.text("auth.name", "Nama")}</span>
                    <input autocomplete="name" value={(*name).clone()} oninput={bind(&name)} />
                </label>
                <label>
                    <span>{bundle.text("auth.email", "Email")}</span>
                    <input type="email" autocomplete="email" value={(*email).clone()} oninput={bind(&email)} />
                </label>
                <label>
                    <span>{bundle.text("auth.password", "Kata sandi")}</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                    />
                </label>
                if let Some(message) = &*error {
                    <p class="error-text" role="alert">{message.clone()}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*busy}>
                    { if *busy {
                        bundle.text("auth.busy", "Memproses...")
                    } else {
                        bundle.text("auth.submit_register", "Daftar")
                    } }
                </button>
            </form>
            <p class="muted">
                {bundle.text("auth.have_account", "Sudah punya akun?")}{" "}
                <Link<Route> to={Route::Login}>{bundle.text("nav.login", "Masuk")}</Link<Route>>
            </p>
        </section>
    }
}
