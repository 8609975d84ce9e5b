//! System log page.

use agribot_api_models::{EntityId, LogEntry};
use chrono::Local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::pagination::Pager;
use crate::components::search::SearchInput;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::pagination::{page_in_range, paginate};
use crate::core::store::{app_dispatch, notify};
use crate::core::toast::ToastKind;
use crate::features::logs::api::fetch_logs;
use crate::features::logs::logic::{PAGE_SIZE, filter_logs, level_class, levels};

fn logged_at(entry: &LogEntry) -> String {
    entry
        .created_at
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[function_component(LogsPage)]
pub(crate) fn logs_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let logs = use_state(|| None as Option<Vec<LogEntry>>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(String::new);
    let level = use_state(|| None as Option<String>);
    let page = use_state(|| 1_usize);
    let expanded = use_state(|| None as Option<EntityId>);

    {
        let logs = logs.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_logs(&ctx.client).await {
                            Ok(loaded) => logs.set(Some(loaded)),
                            Err(failure) => {
                                notify(&app_dispatch(), failure.message.clone(), ToastKind::Error);
                                error.set(Some(failure.message));
                            }
                        }
                    });
                }
                || ()
            },
            *reload,
        );
    }
    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    if let Some(message) = (*error).clone() {
        return html! { <ErrorPanel message={format!("Error: {message}")} on_retry={refresh} /> };
    }
    let Some(entries) = (*logs).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_logs(&entries, &search, level.as_deref());
    let page_no = page_in_range(&filtered, *page, PAGE_SIZE);
    let current = paginate(&filtered, page_no, PAGE_SIZE);
    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |value: String| {
            search.set(value);
            page.set(1);
        })
    };
    let on_level = {
        let level = level.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            level.set((!value.is_empty()).then_some(value));
            page.set(1);
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    html! {
        <div class="space-y-4 p-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-semibold">{"Logs"}</h2>
                <div class="flex items-center gap-2">
                    <SearchInput value={(*search).clone()} placeholder="Search logs..." on_change={on_search} />
                    <select class="select select-sm" onchange={on_level}>
                        <option value="" selected={level.is_none()}>{"All levels"}</option>
                        {for levels(&entries).into_iter().map(|name| html! {
                            <option value={name.clone()} selected={level.as_deref() == Some(name.as_str())}>{name}</option>
                        })}
                    </select>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body overflow-x-auto">
                    if filtered.is_empty() {
                        <EmptyRow message="No logs found." />
                    } else {
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{"Time"}</th>
                                    <th>{"Level"}</th>
                                    <th>{"Message"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for current.items.iter().map(|entry| {
                                    let id = entry.id;
                                    let open = *expanded == Some(id);
                                    let on_toggle = {
                                        let expanded = expanded.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            expanded.set(if open { None } else { Some(id) });
                                        })
                                    };
                                    let details = entry
                                        .details
                                        .as_ref()
                                        .and_then(|value| serde_json::to_string_pretty(value).ok());
                                    html! {
                                        <>
                                            <tr class="hover cursor-pointer" onclick={on_toggle}>
                                                <td class="whitespace-nowrap">{logged_at(entry)}</td>
                                                <td>
                                                    <span class={classes!("badge", "badge-sm", level_class(&entry.level))}>{entry.level.clone()}</span>
                                                </td>
                                                <td class="max-w-xl truncate">{entry.message.clone()}</td>
                                            </tr>
                                            if open {
                                                <tr>
                                                    <td colspan="3" class="space-y-2">
                                                        <p class="whitespace-pre-wrap">{entry.message.clone()}</p>
                                                        if let Some(source) = entry.source.clone() {
                                                            <p class="text-base-content/60 text-sm">{format!("Source: {source}")}</p>
                                                        }
                                                        if let Some(details) = details {
                                                            <pre class="bg-base-200 overflow-x-auto rounded p-3 text-xs">{details}</pre>
                                                        }
                                                    </td>
                                                </tr>
                                            }
                                        </>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                    <Pager page={page_no} total_pages={current.total_pages} on_change={on_page} />
                </div>
            </div>
        </div>
    }
}
