//! Previous/next pager.

use crate::components::use_bundle;
use aksaraya_client::pagination::PageControl;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub control: PageControl,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_bundle();
    let control = props.control;
    let label = bundle.format(
        "pagination.label",
        "{page} / {last}",
        &[
            ("page", control.current.to_string()),
            ("last", control.total.to_string()),
        ],
    );
    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if let Some(page) = control.prev() {
                on_page.emit(page);
            }
        })
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if let Some(page) = control.next() {
                on_page.emit(page);
            }
        })
    };

    html! {
        <nav class="pagination join" aria-label={label.clone()}>
            <button class="btn join-item" disabled={!control.can_prev()} onclick={on_prev}>
                {bundle.text("pagination.prev", "Sebelumnya")}
            </button>
            <span class="join-item page-label">{label}</span>
            <button class="btn join-item" disabled={!control.can_next()} onclick={on_next}>
                {bundle.text("pagination.next", "Selanjutnya")}
            </button>
        </nav>
    }
}
