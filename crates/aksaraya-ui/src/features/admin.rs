//! Admin dashboard: full list, local search, modal create/edit/delete.
//!
//! # Design
//! - [`AdminDashboard`] lives in a `RefCell`; submit and delete run its
//!   `plan_*`, the request, then its `apply_*`, so no borrow spans an await.
//! - Nothing reaches the backend until the delete confirmation is accepted.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::api::{ApiCtx, use_api};
use crate::app::session::use_session;
use crate::components::catalog_form::CatalogFormView;
use crate::components::modal::Modal;
use crate::components::use_bundle;
use crate::i18n::TranslationBundle;
use aksaraya_api_models::Catalog;
use aksaraya_client::admin::{AdminDashboard, AdminModal, SYNOPSIS_WORD_LIMIT, truncate_synopsis};
use aksaraya_client::api::CatalogApi;
use aksaraya_client::form::CatalogDraft;
use aksaraya_client::FallbackMessage;
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type SharedDashboard = Rc<RefCell<AdminDashboard>>;

fn localized(bundle: &TranslationBundle, fallback: FallbackMessage) -> String {
    bundle.text(fallback.key(), fallback.default_text())
}

fn reload(api: &ApiCtx, dashboard: &SharedDashboard, redraw: &UseForceUpdateHandle) {
    dashboard.borrow_mut().begin_reload();
    redraw.force_update();
    let client = api.client.clone();
    let dashboard = dashboard.clone();
    let redraw = redraw.clone();
    yew::platform::spawn_local(async move {
        let result = client.list_catalogs().await;
        dashboard.borrow_mut().finish_reload(result);
        redraw.force_update();
    });
}

#[function_component(AdminDashboardPage)]
pub(crate) fn admin_dashboard_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let session = use_session();
    let dashboard = use_mut_ref(AdminDashboard::new);
    let redraw = use_force_update();
    let busy = use_state(|| false);
    let banner = use_state(|| None::<String>);

    {
        let api = api.clone();
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                reload(&api, &dashboard, &redraw);
                || ()
            },
            (),
        );
    }

    let token = session.token().map(ToString::to_string);

    let on_search = {
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dashboard.borrow_mut().set_search(&input.value());
                redraw.force_update();
            }
        })
    };
    let on_create = {
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            dashboard.borrow_mut().open_create();
            redraw.force_update();
        })
    };
    let on_close = {
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            dashboard.borrow_mut().close_modal();
            redraw.force_update();
        })
    };

    let on_submit = {
        let api = api.clone();
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        let busy = busy.clone();
        let token = token.clone();
        let bundle = bundle.clone();
        Callback::from(move |draft: CatalogDraft| {
            let Some(target) = dashboard.borrow().submit_target() else {
                return;
            };
            let fallback = localized(&bundle, target.fallback());
            let planned = dashboard.borrow().plan_submit(token.as_deref(), &draft);
            let plan = match planned {
                Ok(plan) => plan,
                Err(err) => {
                    dashboard.borrow_mut().apply_submit(Err(err), &fallback);
                    redraw.force_update();
                    return;
                }
            };
            busy.set(true);
            let api = api.clone();
            let dashboard = dashboard.clone();
            let redraw = redraw.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                let result = plan.send(&*api.client).await;
                if let Err(err) = &result {
                    console::error!(format!("catalog submission failed: {err}"));
                }
                let closed = dashboard.borrow_mut().apply_submit(result, &fallback);
                busy.set(false);
                if closed {
                    reload(&api, &dashboard, &redraw);
                } else {
                    redraw.force_update();
                }
            });
        })
    };

    let on_confirm_delete = {
        let api = api.clone();
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        let banner = banner.clone();
        let token = token.clone();
        let fallback = localized(&bundle, FallbackMessage::DeleteCatalog);
        Callback::from(move |_| {
            let Some(id) = dashboard.borrow_mut().plan_delete() else {
                return;
            };
            redraw.force_update();
            let Some(token) = token.clone() else {
                banner.set(Some(fallback.clone()));
                return;
            };
            let api = api.clone();
            let dashboard = dashboard.clone();
            let redraw = redraw.clone();
            let banner = banner.clone();
            let fallback = fallback.clone();
            yew::platform::spawn_local(async move {
                let result = api.client.delete_catalog(&token, id).await;
                let applied = dashboard.borrow().apply_delete(id, result);
                match applied {
                    Ok(()) => {
                        banner.set(None);
                        reload(&api, &dashboard, &redraw);
                    }
                    Err(err) => {
                        console::error!(format!("catalog {id} delete failed: {err}"));
                        banner.set(Some(err.user_message(&fallback)));
                    }
                }
            });
        })
    };

    let state = dashboard.borrow();
    let t = |key: &str, default: &str| bundle.text(key, default);
    let row = |catalog: &Catalog| {
        let on_edit = {
            let dashboard = dashboard.clone();
            let redraw = redraw.clone();
            let catalog = catalog.clone();
            Callback::from(move |_| {
                dashboard.borrow_mut().open_edit(catalog.clone());
                redraw.force_update();
            })
        };
        let on_delete = {
            let dashboard = dashboard.clone();
            let redraw = redraw.clone();
            let catalog = catalog.clone();
            Callback::from(move |_| {
                dashboard.borrow_mut().request_delete(catalog.clone());
                redraw.force_update();
            })
        };
        html! {
            <tr key={catalog.id}>
                <td>{catalog.title.clone()}</td>
                <td>{catalog.author.clone()}</td>
                <td>{catalog.genre.clone()}</td>
                <td>{catalog.kind.clone()}</td>
                <td>{catalog.year.to_string()}</td>
                <td class="synopsis">{truncate_synopsis(&catalog.synopsis, SYNOPSIS_WORD_LIMIT)}</td>
                <td class="actions">
                    <button class="btn btn-sm" onclick={on_edit}>{t("admin.edit", "Ubah")}</button>
                    <button class="btn btn-sm btn-error" onclick={on_delete}>{t("admin.delete", "Hapus")}</button>
                </td>
            </tr>
        }
    };

    let visible = state.filtered();
    let body = if state.is_loading() && state.catalogs().is_empty() {
        html! { <p class="loading">{t("admin.loading", "Memuat katalog...")}</p> }
    } else if visible.is_empty() {
        html! { <p class="empty-state">{t("admin.empty", "Belum ada katalog.")}</p> }
    } else {
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{t("form.title", "Judul")}</th>
                        <th>{t("form.author", "Penulis")}</th>
                        <th>{t("form.genre", "Genre")}</th>
                        <th>{t("form.type", "Tipe")}</th>
                        <th>{t("form.year", "Tahun terbit")}</th>
                        <th>{t("form.synopsis", "Sinopsis")}</th>
                        <th>{t("admin.actions", "Aksi")}</th>
                    </tr>
                </thead>
                <tbody>{ for visible.into_iter().map(row) }</tbody>
            </table>
        }
    };

    let form_error = state.form_error().map(|message| AttrValue::from(message.to_string()));
    let modal = match state.modal() {
        AdminModal::Closed => html! {},
        AdminModal::Create | AdminModal::Edit(_) => {
            let title = if matches!(state.modal(), AdminModal::Create) {
                t("admin.create_title", "Tambah buku baru")
            } else {
                t("admin.edit_title", "Ubah buku")
            };
            html! {
                <Modal {title} on_close={on_close.clone()}>
                    <CatalogFormView
                        initial={state.form_draft().unwrap_or_default()}
                        error={form_error}
                        busy={*busy}
                        {on_submit}
                        on_cancel={on_close.clone()}
                    />
                </Modal>
            }
        }
        AdminModal::ConfirmDelete(catalog) => {
            let body = bundle.format(
                "admin.confirm_body",
                "{title}",
                &[("title", catalog.title.clone())],
            );
            let on_cancel = {
                let on_close = on_close.clone();
                Callback::from(move |_| on_close.emit(()))
            };
            html! {
                <Modal title={t("admin.confirm_title", "Hapus katalog")} on_close={on_close.clone()}>
                    <p>{body}</p>
                    <div class="actions">
                        <button class="btn btn-ghost" onclick={on_cancel}>{t("admin.cancel", "Batal")}</button>
                        <button class="btn btn-error" onclick={on_confirm_delete}>
                            {t("admin.confirm", "Hapus")}
                        </button>
                    </div>
                </Modal>
            }
        }
    };

    html! {
        <section class="admin-dashboard stack">
            <header class="toolbar">
                <h1>{t("admin.title", "Kelola katalog")}</h1>
                <input
                    type="search"
                    class="input"
                    placeholder={t("admin.search_placeholder", "Cari...")}
                    value={state.search().to_string()}
                    oninput={on_search}
                />
                <button class="btn btn-primary" onclick={on_create}>{t("admin.add", "Tambah buku")}</button>
            </header>
            if let Some(message) = &*banner {
                <p class="alert alert-error" role="alert">{message.clone()}</p>
            }
            {body}
            {modal}
        </section>
    }
}
