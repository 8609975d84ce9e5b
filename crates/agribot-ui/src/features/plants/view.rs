//! Plant catalogue page with edit and disease dialogs.

use agribot_api_models::{EntityId, Plant};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::metrics::VersionTable;
use crate::components::modal::Modal;
use crate::components::pagination::Pager;
use crate::components::search::SearchInput;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::metrics::toggle;
use crate::core::pagination::{page_in_range, paginate};
use crate::core::store::{app_dispatch, notify, settle};
use crate::core::toast::ToastKind;
use crate::features::model::logic::format_percent;
use crate::features::plants::api::{fetch_plants, update_diseases, update_plant};
use crate::features::plants::logic::{
    ImageSlot, PAGE_SIZE, PlantForm, disease_link, filter_plants, plant_metrics,
};
use crate::services::files::selected_files;

#[function_component(PlantsPage)]
pub(crate) fn plants_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let data = use_state(|| None as Option<(Vec<Plant>, Vec<String>)>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(String::new);
    let page = use_state(|| 1_usize);
    let expanded = use_state(|| None as Option<EntityId>);
    let editing = use_state(|| None as Option<Plant>);
    let managing = use_state(|| None as Option<Plant>);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_plants(&ctx.client).await {
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
    let Some((plants, disease_names)) = (*data).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_plants(&plants, &search);
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
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };
    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let close_manage = {
        let managing = managing.clone();
        Callback::from(move |()| managing.set(None))
    };
    let saved = |handle: UseStateHandle<Option<Plant>>| {
        let refresh = refresh.clone();
        Callback::from(move |()| {
            handle.set(None);
            refresh.emit(());
        })
    };

    html! {
        <div class="space-y-4 p-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-semibold">{"Plants"}</h2>
                <SearchInput value={(*search).clone()} placeholder="Search plants..." on_change={on_search} />
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body overflow-x-auto">
                    if filtered.is_empty() {
                        <EmptyRow message="No plants found." />
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Plant"}</th>
                                    <th>{"Diseases"}</th>
                                    <th>{"Latest Precision"}</th>
                                    <th />
                                </tr>
                            </thead>
                            <tbody>
                                {for current.items.iter().map(|plant| {
                                    let id = plant.id;
                                    let open = *expanded == Some(id);
                                    let on_expand = {
                                        let expanded = expanded.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            expanded.set(if open { None } else { Some(id) });
                                        })
                                    };
                                    let on_edit = {
                                        let editing = editing.clone();
                                        let plant = plant.clone();
                                        Callback::from(move |_: MouseEvent| editing.set(Some(plant.clone())))
                                    };
                                    let on_manage = {
                                        let managing = managing.clone();
                                        let plant = plant.clone();
                                        Callback::from(move |_: MouseEvent| managing.set(Some(plant.clone())))
                                    };
                                    html! {
                                        <>
                                            <tr class="hover cursor-pointer" onclick={on_expand}>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        if let Some(image) = plant.all_images.first().cloned() {
                                                            <img class="h-10 w-10 rounded object-cover" src={image} alt={plant.name.clone()} />
                                                        }
                                                        <span class="font-medium">{plant.name.clone()}</span>
                                                    </div>
                                                </td>
                                                <td>{plant.all_disease.len()}</td>
                                                <td>{plant.latest_precision.map_or_else(|| "-".to_string(), format_percent)}</td>
                                                <td class="flex gap-2">
                                                    <button class="btn btn-ghost btn-xs" onclick={on_edit}>{"Edit"}</button>
                                                    <button class="btn btn-ghost btn-xs" onclick={on_manage}>{"Manage Diseases"}</button>
                                                </td>
                                            </tr>
                                            if open {
                                                <tr>
                                                    <td colspan="4">
                                                        <PlantDetail plant={plant.clone()} />
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
            if let Some(plant) = (*editing).clone() {
                <EditPlantDialog plant={plant} on_close={close_edit} on_saved={saved(editing.clone())} />
            }
            if let Some(plant) = (*managing).clone() {
                <ManageDiseasesDialog
                    plant={plant}
                    names={disease_names}
                    on_close={close_manage}
                    on_saved={saved(managing.clone())}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    plant: Plant,
}

#[function_component(PlantDetail)]
fn plant_detail(props: &DetailProps) -> Html {
    let plant = &props.plant;
    html! {
        <div class="space-y-3 py-2">
            <p class="text-base-content/80">{plant.description.clone()}</p>
            <div class="flex flex-wrap gap-2">
                {for plant.all_disease.iter().map(|name| html! {
                    <a class="badge badge-outline" href={disease_link(name)}>{name.clone()}</a>
                })}
            </div>
            <VersionTable rows={plant_metrics(plant)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DialogProps {
    plant: Plant,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(EditPlantDialog)]
fn edit_plant_dialog(props: &DialogProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = {
        let plant = props.plant.clone();
        use_state(move || PlantForm::<File>::from_plant(&plant))
    };
    let busy = use_state(|| false);

    let on_name = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            form.set(PlantForm {
                name: value,
                ..(*form).clone()
            });
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(PlantForm {
                description: value,
                ..(*form).clone()
            });
        })
    };
    let on_files = {
        let form = form.clone();
        let busy = busy.clone();
        Callback::from(move |event: Event| {
            if *busy {
                return;
            }
            let input = event.target_unchecked_into::<HtmlInputElement>();
            let mut next = (*form).clone();
            for file in selected_files(&input) {
                let mime = file.type_();
                next.add_image(file, &mime);
            }
            input.set_value("");
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let busy = busy.clone();
        let id = props.plant.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let toast = notify(&dispatch, "Uploading images...", ToastKind::Loading);
            busy.set(true);
            let submitted = (*form).clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match update_plant(&ctx.client, id, &submitted).await {
                    Ok(_) => {
                        settle(&dispatch, toast, "Changes saved successfully!", ToastKind::Success);
                        on_saved.emit(());
                    }
                    Err(_) => settle(&dispatch, toast, "Failed to save changes.", ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let footer = html! {
        <>
            <button class="btn btn-ghost btn-sm" disabled={*busy} onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button class="btn btn-primary btn-sm" disabled={*busy} onclick={on_submit}>{"Save Changes"}</button>
        </>
    };

    html! {
        <Modal open=true title={format!("Edit {}", props.plant.name)} on_close={props.on_close.clone()} busy={*busy} footer={footer}>
            <div class="flex flex-col gap-3">
                <label class="form-control">
                    <span class="label-text">{"Name"}</span>
                    <input class="input input-bordered" value={form.name.clone()} disabled={*busy} oninput={on_name} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Description"}</span>
                    <textarea class="textarea textarea-bordered" value={form.description.clone()} disabled={*busy} oninput={on_description} />
                </label>
                <div class="grid grid-cols-3 gap-2">
                    {for form.images.iter().enumerate().map(|(index, slot)| {
                        let on_remove = {
                            let form = form.clone();
                            let busy = busy.clone();
                            Callback::from(move |_: MouseEvent| {
                                if *busy {
                                    return;
                                }
                                let mut next = (*form).clone();
                                next.remove_image(index);
                                form.set(next);
                            })
                        };
                        let preview = match slot {
                            ImageSlot::Existing(url) => html! { <img class="h-24 w-full rounded object-cover" src={url.clone()} /> },
                            ImageSlot::Added(file) => html! { <div class="flex h-24 items-center justify-center rounded bg-base-200 p-2 text-xs">{file.name()}</div> },
                        };
                        html! {
                            <div class="relative">
                                {preview}
                                <button class="btn btn-circle btn-error btn-xs absolute right-1 top-1" aria-label="Remove image" onclick={on_remove}>{"✕"}</button>
                            </div>
                        }
                    })}
                </div>
                <input class="file-input file-input-bordered" type="file" accept="image/*" multiple=true disabled={*busy} onchange={on_files} />
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct ManageProps {
    plant: Plant,
    names: Vec<String>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(ManageDiseasesDialog)]
fn manage_diseases_dialog(props: &ManageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let selection = {
        let initial = props.plant.all_disease.clone();
        use_state(move || initial)
    };
    let busy = use_state(|| false);

    let on_save = {
        let selection = selection.clone();
        let busy = busy.clone();
        let id = props.plant.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let toast = notify(&dispatch, "Saving disease data...", ToastKind::Loading);
            busy.set(true);
            let diseases = (*selection).clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match update_diseases(&ctx.client, id, diseases).await {
                    Ok(_) => {
                        settle(&dispatch, toast, "Diseases updated successfully!", ToastKind::Success);
                        on_saved.emit(());
                    }
                    Err(_) => settle(&dispatch, toast, "Failed to update plant diseases.", ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let footer = html! {
        <>
            <button class="btn btn-ghost btn-sm" disabled={*busy} onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button class="btn btn-primary btn-sm" disabled={*busy} onclick={on_save}>{"Save"}</button>
        </>
    };

    html! {
        <Modal open=true title={format!("Manage Diseases for {}", props.plant.name)} on_close={props.on_close.clone()} busy={*busy} footer={footer}>
            if props.names.is_empty() {
                <EmptyRow message="No diseases available." />
            }
            <ul class="max-h-80 space-y-1 overflow-y-auto">
                {for props.names.iter().map(|name| {
                    let checked = selection.contains(name);
                    let on_toggle = {
                        let selection = selection.clone();
                        let name = name.clone();
                        Callback::from(move |_: Event| {
                            let mut next = (*selection).clone();
                            toggle(&mut next, name.clone());
                            selection.set(next);
                        })
                    };
                    html! {
                        <li>
                            <label class="label cursor-pointer justify-start gap-3">
                                <input type="checkbox" class="checkbox checkbox-sm" checked={checked} disabled={*busy} onchange={on_toggle} />
                                <span>{name.clone()}</span>
                            </label>
                        </li>
                    }
                })}
            </ul>
        </Modal>
    }
}
