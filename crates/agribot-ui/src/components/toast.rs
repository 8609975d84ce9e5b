//! Toast stack rendered once at the app root.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::core::store::{AppStore, ToastAction, accept, app_dispatch, dismiss};
use crate::core::toast::{Toast, ToastKind};

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let dispatch = app_dispatch();
    let toasts = use_selector(|store: &AppStore| store.toasts.toasts().to_vec());
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |list: &Rc<Vec<Toast<ToastAction>>>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .filter_map(|toast| {
                        let timeout_ms = toast.timeout_ms?;
                        let dispatch = dispatch.clone();
                        let id = toast.id;
                        Some(Timeout::new(timeout_ms, move || dismiss(&dispatch, id)))
                    })
                    .collect();
                move || drop(handles)
            },
            toasts.clone(),
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(render_toast)}
        </div>
    }
}

fn render_toast(toast: &Toast<ToastAction>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_: MouseEvent| dismiss(&app_dispatch(), id));
    let spinner = (toast.kind == ToastKind::Loading).then(|| html! { <span class="spinner small" /> });

    if toast.is_confirm() {
        let on_confirm = Callback::from(move |_: MouseEvent| accept(&app_dispatch(), id));
        return html! {
            <div class="toast confirm" role="alertdialog">
                <span>{toast.message.clone()}</span>
                <div class="actions">
                    <button class="btn btn-ghost btn-xs" onclick={on_close}>{"Cancel"}</button>
                    <button class="btn btn-error btn-xs" onclick={on_confirm}>{"Confirm"}</button>
                </div>
            </div>
        };
    }

    html! {
        <div class={classes!("toast", toast.kind.class())} role="status">
            {for spinner}
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs btn-circle" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
