//! Prev/next pager used under every list.

use yew::prelude::*;

use crate::core::pagination::clamp_page;

#[derive(Properties, PartialEq)]
pub(crate) struct PagerProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pager)]
pub(crate) fn pager(props: &PagerProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let page = clamp_page(props.page, props.total_pages);
    let total = props.total_pages;
    let prev = props.on_change.reform(move |_: MouseEvent| page.saturating_sub(1).max(1));
    let next = props.on_change.reform(move |_: MouseEvent| (page + 1).min(total));

    html! {
        <div class="pager">
            <button class="btn btn-ghost btn-sm" disabled={page == 1} onclick={prev}>{"Prev"}</button>
            <span class="muted">{format!("Page {page} of {total}")}</span>
            <button class="btn btn-ghost btn-sm" disabled={page == total} onclick={next}>{"Next"}</button>
        </div>
    }
}
