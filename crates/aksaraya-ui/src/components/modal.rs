use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog overlay; closing is delegated to the owner.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <header class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="btn btn-ghost btn-sm" aria-label="close" onclick={on_close}>
                        {"✕"}
                    </button>
                </header>
                { for props.children.iter() }
            </div>
        </div>
    }
}
