use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    pub value: String,
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let oninput = props
        .on_change
        .reform(|event: InputEvent| event.target_unchecked_into::<HtmlInputElement>().value());
    html! {
        <div class="searchbar">
            <input
                type="search"
                class="input input-bordered input-sm w-full"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-label={props.placeholder.clone()}
                oninput={oninput}
            />
        </div>
    }
}
