//! Dashboard page.

use agribot_api_models::{Activity, ModelVersion};
use chrono::Local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::modal::Modal;
use crate::components::status::{ErrorPanel, LoadingPanel};
use crate::core::store::{app_dispatch, notify};
use crate::core::toast::ToastKind;
use crate::features::dashboard::api::fetch_dashboard;
use crate::features::dashboard::logic::{
    DashboardData, RECENT_ACTIVITY_LIMIT, ROBOT_SPECS, ROBOT_VERSION, cell_tooltip, daily_counts,
    heatmap_cells, intensity,
};
use crate::features::model::logic::{ModelCategory, comparison_rows};

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let data = use_state(|| None as Option<DashboardData>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    data.set(None);
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_dashboard(&ctx.client).await {
                            Ok(loaded) => data.set(Some(loaded)),
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
    let Some(data) = (*data).clone() else {
        return html! { <LoadingPanel /> };
    };

    html! {
        <div class="grid gap-5 p-6 lg:grid-cols-2">
            <div class="space-y-5">
                <ModelComparison
                    object_detection={data.object_detection.clone()}
                    stage_classification={data.stage_classification.clone()}
                    segmentation={data.segmentation.clone()}
                />
                <ActivityHeatmap activities={data.activities.clone()} />
            </div>
            <div class="space-y-5">
                <SummaryCards plant_count={data.plant_count} disease_count={data.disease_count} />
                <RobotSpecifications />
                <RecentActivity activities={data.activities} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryProps {
    plant_count: u64,
    disease_count: u64,
}

#[function_component(SummaryCards)]
fn summary_cards(props: &SummaryProps) -> Html {
    let card = |label: &str, value: String, note: Option<&str>| {
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-2">
                    <p class="text-base-content/80 text-sm font-medium">{label.to_string()}</p>
                    <p class="text-2xl font-semibold">{value}</p>
                    if let Some(note) = note {
                        <p class="text-base-content/60 text-sm">{note.to_string()}</p>
                    }
                </div>
            </div>
        }
    };
    html! {
        <div class="grid gap-5 sm:grid-cols-3">
            {card("Detectable Plants", props.plant_count.to_string(), None)}
            {card("Detectable Diseases", props.disease_count.to_string(), None)}
            {card("Latest AGRIBOT Version", ROBOT_VERSION.to_string(), Some("AI for plant disease detection"))}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ComparisonProps {
    object_detection: Vec<ModelVersion>,
    stage_classification: Vec<ModelVersion>,
    segmentation: Vec<ModelVersion>,
}

#[function_component(ModelComparison)]
fn model_comparison(props: &ComparisonProps) -> Html {
    let category = use_state(|| ModelCategory::ObjectDetection);
    let models = match *category {
        ModelCategory::ObjectDetection => &props.object_detection,
        ModelCategory::StageClassification => &props.stage_classification,
        ModelCategory::Segmentation => &props.segmentation,
    };
    let rows = comparison_rows(*category, models);
    let on_select = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            let key = event.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(next) = ModelCategory::from_key(&key) {
                category.set(next);
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="card-title">{"Latest Model Comparison"}</h3>
                    <select class="select select-sm" onchange={on_select}>
                        {for ModelCategory::ALL.iter().map(|option| html! {
                            <option value={option.key()} selected={*option == *category}>{option.label()}</option>
                        })}
                    </select>
                </div>
                if models.is_empty() {
                    <p class="text-base-content/60 text-sm">{"No models uploaded yet."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{"Metric"}</th>
                                    {for models.iter().map(|model| html! { <th>{model.version.clone()}</th> })}
                                </tr>
                            </thead>
                            <tbody>
                                {for rows.iter().map(|row| html! {
                                    <tr>
                                        <td class="font-medium">{row.metric.label()}</td>
                                        {for row.values.iter().map(|(_, value)| html! { <td>{format!("{value:.2}%")}</td> })}
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityProps {
    activities: Vec<Activity>,
}

#[function_component(ActivityHeatmap)]
fn activity_heatmap(props: &ActivityProps) -> Html {
    let cells = heatmap_cells(Local::now().date_naive(), &daily_counts(&props.activities));
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Milestones"}</h3>
                <div class="heatmap">
                    {for cells.iter().map(|cell| html! {
                        <span
                            class={classes!("heatmap-cell", format!("level-{}", intensity(cell.count)))}
                            title={cell_tooltip(*cell)}
                        />
                    })}
                </div>
            </div>
        </div>
    }
}

#[function_component(RobotSpecifications)]
fn robot_specifications() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Robot Specification"}</h3>
                <div class="max-h-72 overflow-y-auto">
                    <table class="table table-sm">
                        <tbody>
                            {for ROBOT_SPECS.iter().map(|(label, value)| html! {
                                <tr>
                                    <td class="font-medium">{*label}</td>
                                    <td>{*value}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn activity_item(activity: &Activity) -> Html {
    html! {
        <li class="flex flex-col gap-1 border-b border-base-200 py-2">
            <p>
                <span class="badge badge-soft badge-sm mr-2">{activity.kind.clone()}</span>
                <span class="font-medium">{activity.repo.clone()}</span>
                {format!(" - {}", activity.details)}
            </p>
            <p class="text-base-content/60 text-xs">{activity.created_at.clone()}</p>
        </li>
    }
}

#[function_component(RecentActivity)]
fn recent_activity(props: &ActivityProps) -> Html {
    let show_all = use_state(|| false);
    let open = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(true))
    };
    let close = {
        let show_all = show_all.clone();
        Callback::from(move |()| show_all.set(false))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Update Activity"}</h3>
                <ul>
                    {for props.activities.iter().take(RECENT_ACTIVITY_LIMIT).map(activity_item)}
                </ul>
                <button class="btn btn-ghost btn-sm" onclick={open}>{"Show All Activities"}</button>
                <Modal open={*show_all} title="All Activities" on_close={close}>
                    <p class="text-base-content/60 text-sm">{"Below are all the activities recorded."}</p>
                    <ul class="max-h-96 overflow-y-auto">
                        {for props.activities.iter().map(activity_item)}
                    </ul>
                </Modal>
            </div>
        </div>
    }
}
