//! Loading and error placeholders shared by every page.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    #[prop_or(AttrValue::from("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingPanel)]
pub(crate) fn loading_panel(props: &LoadingProps) -> Html {
    html! {
        <div class="panel loading" role="status">
            <span class="spinner" />
            <p class="muted">{props.label.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorPanel)]
pub(crate) fn error_panel(props: &ErrorProps) -> Html {
    let retry = props.on_retry.reform(|_: MouseEvent| ());
    html! {
        <div class="panel error" role="alert">
            <p>{props.message.clone()}</p>
            <button class="btn btn-ghost btn-sm" onclick={retry}>{"Retry"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyProps {
    pub message: AttrValue,
}

#[function_component(EmptyRow)]
pub(crate) fn empty_row(props: &EmptyProps) -> Html {
    html! { <p class="empty muted">{props.message.clone()}</p> }
}
