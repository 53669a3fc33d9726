//! Create/edit form for a catalog entry.
//!
//! # Design
//! - The form edits a [`CatalogDraft`] verbatim; validation happens on submit
//!   in the core so the same rules apply to every client.
//! - A picked cover is read into memory before it can be submitted.

use crate::components::use_bundle;
use aksaraya_api_models::vocabulary::{CATALOG_TYPES, GENRES};
use aksaraya_client::form::{CatalogDraft, CoverUpload};
use gloo::console;
use gloo::file::File;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogFormProps {
    pub initial: CatalogDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<CatalogDraft>,
    pub on_cancel: Callback<()>,
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Author,
    Genre,
    Year,
    Kind,
    Publisher,
    Synopsis,
}

fn set_field(draft: &mut CatalogDraft, field: Field, value: String) {
    match field {
        Field::Title => draft.title = value,
        Field::Author => draft.author = value,
        Field::Genre => draft.genre = value,
        Field::Year => draft.year = value,
        Field::Kind => draft.kind = value,
        Field::Publisher => draft.publisher = value,
        Field::Synopsis => draft.synopsis = value,
    }
}

#[function_component(CatalogFormView)]
pub(crate) fn catalog_form(props: &CatalogFormProps) -> Html {
    let bundle = use_bundle();
    let draft = use_state(|| props.initial.clone());
    let cover = use_state(|| None::<CoverUpload>);
    let reading_cover = use_state(|| false);

    let edit = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let value = if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                input.value()
            } else if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                select.value()
            } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            let mut next = (*draft).clone();
            set_field(&mut next, field, value);
            draft.set(next);
        })
    };

    let on_cover = {
        let cover = cover.clone();
        let reading_cover = reading_cover.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = File::from(file);
            let cover = cover.clone();
            let reading_cover = reading_cover.clone();
            reading_cover.set(true);
            yew::platform::spawn_local(async move {
                match gloo::file::futures::read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let file_name = file.name();
                        let content_type = if file.raw_mime_type().is_empty() {
                            CoverUpload::guess_content_type(&file_name).to_string()
                        } else {
                            file.raw_mime_type()
                        };
                        cover.set(Some(CoverUpload {
                            file_name,
                            content_type,
                            bytes,
                        }));
                    }
                    Err(err) => console::error!(format!("cover could not be read: {err}")),
                }
                reading_cover.set(false);
            });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let cover = cover.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*draft).clone();
            next.cover = (*cover).clone();
            on_submit.emit(next);
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let options = |values: &[&str], current: &str| {
        values
            .iter()
            .map(|value| {
                html! { <option value={value.to_string()} selected={*value == current}>{*value}</option> }
            })
            .collect::<Html>()
    };
    let label = |key: &str| bundle.text(&format!("form.{key}"), key);
    let disabled = props.busy || *reading_cover;

    html! {
        <form class="catalog-form stack" {onsubmit}>
            <label>
                <span>{label("title")}</span>
                <input value={draft.title.clone()} onchange={edit(Field::Title)} />
            </label>
            <label>
                <span>{label("author")}</span>
                <input value={draft.author.clone()} onchange={edit(Field::Author)} />
            </label>
            <label>
                <span>{label("genre")}</span>
                <select onchange={edit(Field::Genre)}>
                    <option value="" selected={draft.genre.is_empty()}>{label("choose")}</option>
                    {options(&GENRES, &draft.genre)}
                </select>
            </label>
            <label>
                <span>{label("year")}</span>
                <input type="number" min="1" value={draft.year.clone()} onchange={edit(Field::Year)} />
            </label>
            <label>
                <span>{label("type")}</span>
                <select onchange={edit(Field::Kind)}>
                    <option value="" selected={draft.kind.is_empty()}>{label("choose")}</option>
                    {options(&CATALOG_TYPES, &draft.kind)}
                </select>
            </label>
            <label>
                <span>{label("publisher")}</span>
                <input value={draft.publisher.clone()} onchange={edit(Field::Publisher)} />
            </label>
            <label>
                <span>{label("synopsis")}</span>
                <textarea rows="5" value={draft.synopsis.clone()} onchange={edit(Field::Synopsis)} />
            </label>
            <label>
                <span>{label("cover")}</span>
                <input type="file" accept="image/*" onchange={on_cover} />
            </label>
            if let Some(error) = &props.error {
                <p class="error-text" role="alert">{error.clone()}</p>
            }
            <div class="actions">
                <button type="button" class="btn btn-ghost" onclick={on_cancel}>
                    {bundle.text("admin.cancel", "Batal")}
                </button>
                <button type="submit" class="btn btn-primary" {disabled}>
                    {bundle.text("admin.save", "Simpan")}
                </button>
            </div>
        </form>
    }
}
