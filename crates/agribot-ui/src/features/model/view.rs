//! Model catalogue page.

use agribot_api_models::{ModelVersion, Plant};
use chrono::Local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::metrics::MetricBar;
use crate::components::modal::Modal;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::store::{app_dispatch, confirm, notify, settle};
use crate::core::toast::ToastKind;
use crate::features::model::api::{Catalogue, create_model, delete_model, fetch_catalogue};
use crate::features::model::logic::{
    MATERIALS, ModelCategory, ModelForm, download_link, material_search_link,
};
use crate::services::files::{read_text, selected_files};

#[function_component(ModelPage)]
pub(crate) fn model_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let catalogue = use_state(|| None as Option<Catalogue>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let category = use_state(|| ModelCategory::ObjectDetection);
    let selected = use_state(|| None as Option<i64>);
    let add_open = use_state(|| false);
    let materials_open = use_state(|| false);

    {
        let api_ctx = api_ctx.clone();
        let catalogue = catalogue.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    catalogue.set(None);
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_catalogue(&ctx.client).await {
                            Ok(loaded) => catalogue.set(Some(loaded)),
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
    let Some(data) = (*catalogue).clone() else {
        return html! { <LoadingPanel /> };
    };

    let models = data.models(*category);
    let current = (*selected)
        .and_then(|id| models.iter().find(|model| model.id == id))
        .or_else(|| models.first())
        .cloned();

    let on_category = {
        let category = category.clone();
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let key = event.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(next) = ModelCategory::from_key(&key) {
                category.set(next);
                selected.set(None);
            }
        })
    };
    let on_delete = {
        let api_ctx = api_ctx.clone();
        let refresh = refresh.clone();
        let target = *category;
        Callback::from(move |model: ModelVersion| {
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let refresh = refresh.clone();
            let id = model.id;
            let on_confirm = Callback::from(move |()| {
                let ctx = ctx.clone();
                let refresh = refresh.clone();
                let dispatch = app_dispatch();
                let toast = notify(&dispatch, "Deleting model...", ToastKind::Loading);
                yew::platform::spawn_local(async move {
                    match delete_model(&ctx.client, target, id).await {
                        Ok(ack) => {
                            let message = ack
                                .message
                                .unwrap_or_else(|| "Model deleted successfully.".to_string());
                            settle(&dispatch, toast, message, ToastKind::Success);
                            refresh.emit(());
                        }
                        Err(failure) => settle(&dispatch, toast, failure.message, ToastKind::Error),
                    }
                });
            });
            let on_cancel = Callback::from(|()| {
                notify(&app_dispatch(), "Delete cancelled.", ToastKind::Info);
            });
            confirm(
                &dispatch,
                format!("Are you sure you want to delete model \"{}\"?", model.version),
                on_confirm,
                Some(on_cancel),
            );
        })
    };
    let open_add = {
        let add_open = add_open.clone();
        Callback::from(move |_: MouseEvent| add_open.set(true))
    };
    let close_add = {
        let add_open = add_open.clone();
        Callback::from(move |()| add_open.set(false))
    };
    let on_created = {
        let add_open = add_open.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            add_open.set(false);
            refresh.emit(());
        })
    };
    let open_materials = {
        let materials_open = materials_open.clone();
        Callback::from(move |_: MouseEvent| materials_open.set(true))
    };
    let close_materials = {
        let materials_open = materials_open.clone();
        Callback::from(move |()| materials_open.set(false))
    };

    html! {
        <div class="grid gap-5 p-6 lg:grid-cols-3">
            <div class="card bg-base-100 shadow lg:col-span-2">
                <div class="card-body gap-4">
                    <div class="flex flex-wrap items-center justify-between gap-2">
                        <h3 class="card-title">{"Model Versions"}</h3>
                        <div class="flex gap-2">
                            <select class="select select-sm" onchange={on_category}>
                                {for ModelCategory::ALL.iter().map(|option| html! {
                                    <option value={option.key()} selected={*option == *category}>{option.label()}</option>
                                })}
                            </select>
                            <button class="btn btn-primary btn-sm" onclick={open_add}>{"Add Model"}</button>
                        </div>
                    </div>
                    if models.is_empty() {
                        <EmptyRow message="No models uploaded yet." />
                    } else {
                        <div class="flex flex-wrap gap-2">
                            {for models.iter().map(|model| {
                                let active = current.as_ref().is_some_and(|item| item.id == model.id);
                                let id = model.id;
                                let selected = selected.clone();
                                html! {
                                    <button
                                        class={classes!("btn", "btn-sm", if active { "btn-active" } else { "btn-ghost" })}
                                        onclick={Callback::from(move |_: MouseEvent| selected.set(Some(id)))}
                                    >{model.version.clone()}</button>
                                }
                            })}
                        </div>
                    }
                    if let Some(model) = current.clone() {
                        <ModelDetail category={*category} model={model} on_delete={on_delete} />
                    }
                </div>
            </div>
            <div class="space-y-5">
                <PlantPrecision plants={data.plants.clone()} />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Materials"}</h3>
                        <p class="text-base-content/60 text-sm">{"Components used to build the robot."}</p>
                        <button class="btn btn-ghost btn-sm" onclick={open_materials}>{"View Materials"}</button>
                    </div>
                </div>
            </div>
            <AddModelDialog open={*add_open} category={*category} on_close={close_add} on_created={on_created} />
            <Modal open={*materials_open} title="Materials" on_close={close_materials}>
                <ul class="max-h-96 space-y-2 overflow-y-auto">
                    {for MATERIALS.iter().map(|(name, description)| html! {
                        <li>
                            <a class="link link-primary" href={material_search_link(name)} target="_blank" rel="noreferrer">
                                {*name}
                            </a>
                            <p class="text-base-content/60 text-sm">{*description}</p>
                        </li>
                    })}
                </ul>
            </Modal>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    category: ModelCategory,
    model: ModelVersion,
    on_delete: Callback<ModelVersion>,
}

#[function_component(ModelDetail)]
fn model_detail(props: &DetailProps) -> Html {
    let model = &props.model;
    let delete = {
        let model = model.clone();
        props.on_delete.reform(move |_: MouseEvent| model.clone())
    };
    let uploaded = model
        .created_at
        .map(|at| at.with_timezone(&Local).format("%b %d, %Y").to_string());

    html! {
        <div class="space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <p class="font-semibold">{model.version.clone()}</p>
                    <p class="text-base-content/70 text-sm">{model.description.clone()}</p>
                    if let Some(uploaded) = uploaded {
                        <p class="text-base-content/60 text-xs">{format!("Uploaded {uploaded}")}</p>
                    }
                </div>
                <div class="flex gap-2">
                    if let Some(link) = model.download_link.as_deref() {
                        <a class="btn btn-outline btn-sm" href={download_link(link)} target="_blank" rel="noreferrer">{"Download"}</a>
                    }
                    <button class="btn btn-error btn-sm" onclick={delete}>{"Delete"}</button>
                </div>
            </div>
            {for props.category.metrics().iter().map(|metric| html! {
                <MetricBar label={metric.label()} ratio={metric.value(model).unwrap_or(0.0)} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlantPrecisionProps {
    plants: Vec<Plant>,
}

#[function_component(PlantPrecision)]
fn plant_precision(props: &PlantPrecisionProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Plant Precision"}</h3>
                if props.plants.is_empty() {
                    <EmptyRow message="No plants found." />
                }
                {for props.plants.iter().map(|plant| html! {
                    <div class="flex items-center gap-3">
                        if let Some(image) = plant.image.clone() {
                            <img class="h-10 w-10 rounded object-cover" src={image} alt={plant.name.clone()} />
                        }
                        <div class="flex-1">
                            <MetricBar label={plant.name.clone()} ratio={plant.latest_precision.unwrap_or(0.0)} />
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddModelProps {
    open: bool,
    category: ModelCategory,
    on_close: Callback<()>,
    on_created: Callback<()>,
}

#[function_component(AddModelDialog)]
fn add_model_dialog(props: &AddModelProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = use_state(ModelForm::default);
    let metrics_json = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let text_input = |apply: fn(&mut ModelForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_version = text_input(|form, value| form.version = value);
    let on_file = text_input(|form, value| form.file = value);
    let on_description = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(ModelForm {
                description: value,
                ..(*form).clone()
            });
        })
    };
    let on_metrics = {
        let metrics_json = metrics_json.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            let Some(file) = selected_files(&input).into_iter().next() else {
                metrics_json.set(None);
                return;
            };
            let metrics_json = metrics_json.clone();
            yew::platform::spawn_local(async move {
                match read_text(&file).await {
                    Ok(text) => metrics_json.set(Some(text)),
                    Err(err) => {
                        notify(&app_dispatch(), format!("Error reading file: {err}"), ToastKind::Error);
                        metrics_json.set(None);
                    }
                }
            });
        })
    };
    let on_submit = {
        let form = form.clone();
        let metrics_json = metrics_json.clone();
        let busy = busy.clone();
        let category = props.category;
        let on_created = props.on_created.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = app_dispatch();
            let candidate = ModelForm {
                metrics_json: (*metrics_json).clone(),
                ..(*form).clone()
            };
            let draft = match candidate.to_draft() {
                Ok(draft) => draft,
                Err(err) => {
                    notify(&dispatch, err.to_string(), ToastKind::Error);
                    return;
                }
            };
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            busy.set(true);
            let toast = notify(&dispatch, "Uploading model...", ToastKind::Loading);
            let form = form.clone();
            let metrics_json = metrics_json.clone();
            let busy = busy.clone();
            let on_created = on_created.clone();
            yew::platform::spawn_local(async move {
                match create_model(&ctx.client, category, &draft).await {
                    Ok(ack) => {
                        let message = ack
                            .message
                            .unwrap_or_else(|| "Model uploaded successfully!".to_string());
                        settle(&dispatch, toast, message, ToastKind::Success);
                        form.set(ModelForm::default());
                        metrics_json.set(None);
                        on_created.emit(());
                    }
                    Err(failure) => settle(&dispatch, toast, failure.message, ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let footer = html! {
        <>
            <button class="btn btn-ghost btn-sm" disabled={*busy} onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button class="btn btn-primary btn-sm" disabled={*busy} onclick={on_submit}>{"Upload"}</button>
        </>
    };

    html! {
        <Modal
            open={props.open}
            title={format!("Add {} Model", props.category.label())}
            on_close={props.on_close.clone()}
            busy={*busy}
            footer={footer}
        >
            <div class="flex flex-col gap-3">
                <label class="form-control">
                    <span class="label-text">{"Version"}</span>
                    <input class="input input-bordered" value={form.version.clone()} oninput={on_version} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Description"}</span>
                    <textarea class="textarea textarea-bordered" value={form.description.clone()} oninput={on_description} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Model File"}</span>
                    <input class="input input-bordered" placeholder="Link to the weights" value={form.file.clone()} oninput={on_file} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Metrics (JSON)"}</span>
                    <input class="file-input file-input-bordered" type="file" accept="application/json" onchange={on_metrics} />
                </label>
            </div>
        </Modal>
    }
}
