//! Dialog overlay.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let busy = props.busy;
    let on_close = {
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if !busy {
                close.emit(());
            }
        })
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <div class="modal-box">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
                    <button
                        class="btn btn-ghost btn-xs btn-circle"
                        aria-label="Close"
                        disabled={busy}
                        onclick={on_close.clone()}
                    >{"✕"}</button>
                </div>
                <div class="py-4">{for props.children.iter()}</div>
                <div class="modal-action">{props.footer.clone()}</div>
            </div>
            <button class="modal-backdrop" onclick={on_close}></button>
        </div>
    }
}
