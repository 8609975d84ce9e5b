//! Feedback page with rating summaries.

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
use crate::features::feedback::api::fetch_feedback;
use crate::features::feedback::logic::{
    PAGE_SIZE, RatedFeedback, StarFilter, category_averages, filter_feedback, star_distribution,
};

fn stars(count: u8) -> String {
    (1..=5)
        .map(|slot| if slot <= count { '★' } else { '☆' })
        .collect()
}

#[function_component(FeedbackPage)]
pub(crate) fn feedback_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let entries = use_state(|| None as Option<Vec<RatedFeedback>>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(String::new);
    let filter = use_state(|| StarFilter::All);
    let page = use_state(|| 1_usize);

    {
        let entries = entries.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_feedback(&ctx.client).await {
                            Ok(loaded) => entries.set(Some(loaded)),
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
    let Some(all) = (*entries).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_feedback(&all, &search, *filter);
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
    let on_filter = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            filter.set(StarFilter::parse(&value));
            page.set(1);
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    html! {
        <div class="grid gap-5 p-6 lg:grid-cols-3">
            <div class="space-y-4 lg:col-span-2">
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <h2 class="text-xl font-semibold">{"Feedback"}</h2>
                    <div class="flex items-center gap-2">
                        <SearchInput value={(*search).clone()} placeholder="Search by name..." on_change={on_search} />
                        <select class="select select-sm" onchange={on_filter}>
                            <option value="all" selected={*filter == StarFilter::All}>{"All ratings"}</option>
                            {for (1..=5_u8).rev().map(|count| html! {
                                <option value={count.to_string()} selected={*filter == StarFilter::Exactly(count)}>
                                    {format!("{count} star{}", if count == 1 { "" } else { "s" })}
                                </option>
                            })}
                        </select>
                    </div>
                </div>
                if filtered.is_empty() {
                    <EmptyRow message="No feedback found." />
                }
                {for current.items.iter().map(|item| {
                    let author = item.feedback.user.full_name.clone().unwrap_or_else(|| item.feedback.user.email.clone());
                    let when = item
                        .feedback
                        .updated_at
                        .or(item.feedback.created_at)
                        .map(|at| at.with_timezone(&Local).format("%b %d, %Y").to_string())
                        .unwrap_or_default();
                    html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body gap-2">
                                <div class="flex flex-wrap items-center justify-between gap-2">
                                    <div>
                                        <p class="font-semibold">{author}</p>
                                        <p class="text-base-content/60 text-xs">{when}</p>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class="text-warning">{stars(item.stars)}</span>
                                        <span class="badge badge-outline badge-sm">{item.label}</span>
                                    </div>
                                </div>
                                <p class="font-medium">{item.feedback.title.clone()}</p>
                                <p class="text-base-content/80 whitespace-pre-line">{item.feedback.message.clone()}</p>
                            </div>
                        </div>
                    }
                })}
                <Pager page={page_no} total_pages={current.total_pages} on_change={on_page} />
            </div>
            <RatingSummary entries={all} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryProps {
    entries: Vec<RatedFeedback>,
}

#[function_component(RatingSummary)]
fn rating_summary(props: &SummaryProps) -> Html {
    let averages = category_averages(&props.entries);
    let distribution = star_distribution(&props.entries);
    let most = distribution.iter().copied().max().unwrap_or(0).max(1);

    html! {
        <div class="space-y-5">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Average per Category"}</h3>
                    if averages.is_empty() {
                        <EmptyRow message="No ratings yet." />
                    }
                    {for averages.iter().map(|entry| {
                        let width = format!("width: {:.1}%", (entry.average / 5.0 * 100.0).clamp(0.0, 100.0));
                        html! {
                            <div class="metric-bar">
                                <div class="metric-label">
                                    <span class="capitalize">{entry.category.clone()}</span>
                                    <span class="text-base-content/60">{format!("{:.2}", entry.average)}</span>
                                </div>
                                <div class="track"><div class="fill" style={width} /></div>
                            </div>
                        }
                    })}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Star Distribution"}</h3>
                    {for distribution.iter().enumerate().rev().map(|(index, count)| {
                        let width = format!("width: {}%", count * 100 / most);
                        html! {
                            <div class="flex items-center gap-2">
                                <span class="w-12 text-sm">{format!("{} ★", index + 1)}</span>
                                <div class="track flex-1"><div class="fill" style={width} /></div>
                                <span class="w-8 text-right text-sm">{*count}</span>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
