//! Disease catalogue page.

use agribot_api_models::{Disease, EntityId, Spray};
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
use crate::features::diseases::api::{fetch_diseases, fetch_sprays, update_sprays};
use crate::features::diseases::logic::{
    PAGE_SIZE, disease_metrics, filter_diseases, search_param, spray_names,
};

fn initial_search() -> String {
    gloo::utils::window()
        .location()
        .search()
        .map(|query| search_param(&query))
        .unwrap_or_default()
}

#[function_component(DiseasesPage)]
pub(crate) fn diseases_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let diseases = use_state(|| None as Option<Vec<Disease>>);
    let sprays = use_state(|| None as Option<Vec<Spray>>);
    let sprays_requested = use_mut_ref(|| false);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(initial_search);
    let page = use_state(|| 1_usize);
    let expanded = use_state(|| None as Option<EntityId>);
    let managing = use_state(|| None as Option<Disease>);

    {
        let api_ctx = api_ctx.clone();
        let diseases = diseases.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_diseases(&ctx.client).await {
                            Ok(loaded) => diseases.set(Some(loaded)),
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
    let load_sprays = {
        let sprays = sprays.clone();
        Callback::from(move |()| {
            if *sprays_requested.borrow() {
                return;
            }
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            *sprays_requested.borrow_mut() = true;
            let sprays = sprays.clone();
            let requested = sprays_requested.clone();
            yew::platform::spawn_local(async move {
                match fetch_sprays(&ctx.client).await {
                    Ok(loaded) => sprays.set(Some(loaded)),
                    Err(failure) => {
                        *requested.borrow_mut() = false;
                        notify(&app_dispatch(), failure.message, ToastKind::Error);
                    }
                }
            });
        })
    };
    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    if let Some(message) = (*error).clone() {
        return html! { <ErrorPanel message={format!("Error: {message}")} on_retry={refresh} /> };
    }
    let Some(list) = (*diseases).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_diseases(&list, &search);
    let page_no = page_in_range(&filtered, *page, PAGE_SIZE);
    let current = paginate(&filtered, page_no, PAGE_SIZE);
    let catalogue = (*sprays).clone();
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
    let close_manage = {
        let managing = managing.clone();
        Callback::from(move |()| managing.set(None))
    };
    let on_saved = {
        let managing = managing.clone();
        Callback::from(move |()| {
            managing.set(None);
            refresh.emit(());
        })
    };

    html! {
        <div class="space-y-4 p-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-semibold">{"Diseases"}</h2>
                <SearchInput value={(*search).clone()} placeholder="Search diseases..." on_change={on_search} />
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body overflow-x-auto">
                    if filtered.is_empty() {
                        <EmptyRow message="No diseases found." />
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Disease"}</th>
                                    <th>{"Images"}</th>
                                    <th>{"Sprays"}</th>
                                    <th />
                                </tr>
                            </thead>
                            <tbody>
                                {for current.items.iter().map(|disease| {
                                    let id = disease.id;
                                    let open = *expanded == Some(id);
                                    let on_expand = {
                                        let expanded = expanded.clone();
                                        let load_sprays = load_sprays.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            if open {
                                                expanded.set(None);
                                            } else {
                                                load_sprays.emit(());
                                                expanded.set(Some(id));
                                            }
                                        })
                                    };
                                    let on_manage = {
                                        let managing = managing.clone();
                                        let load_sprays = load_sprays.clone();
                                        let disease = disease.clone();
                                        Callback::from(move |event: MouseEvent| {
                                            event.stop_propagation();
                                            load_sprays.emit(());
                                            managing.set(Some(disease.clone()));
                                        })
                                    };
                                    html! {
                                        <>
                                            <tr class="hover cursor-pointer" onclick={on_expand}>
                                                <td class="font-medium">{disease.name.clone()}</td>
                                                <td>{disease.all_images.len()}</td>
                                                <td>{disease.all_spray_ids.len()}</td>
                                                <td>
                                                    <button class="btn btn-ghost btn-xs" onclick={on_manage}>{"Manage Sprays"}</button>
                                                </td>
                                            </tr>
                                            if open {
                                                <tr>
                                                    <td colspan="4">
                                                        <DiseaseDetail disease={disease.clone()} sprays={catalogue.clone()} />
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
            if let Some(disease) = (*managing).clone() {
                <ManageSpraysDialog
                    disease={disease}
                    sprays={catalogue}
                    on_close={close_manage}
                    on_saved={on_saved}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    disease: Disease,
    sprays: Option<Vec<Spray>>,
}

#[function_component(DiseaseDetail)]
fn disease_detail(props: &DetailProps) -> Html {
    let disease = &props.disease;
    let recommended = props.sprays.as_deref().map(|sprays| {
        spray_names(disease, sprays)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    html! {
        <div class="space-y-3 py-2">
            <p class="text-base-content/80">{disease.description.clone()}</p>
            <div class="flex flex-wrap gap-2">
                {for disease.all_images.iter().map(|url| html! {
                    <img class="h-20 w-20 rounded object-cover" src={url.clone()} alt={disease.name.clone()} />
                })}
            </div>
            <div>
                <p class="font-medium">{"Recommended Sprays"}</p>
                {match recommended {
                    None => html! { <p class="text-base-content/60 text-sm">{"Loading sprays..."}</p> },
                    Some(names) if names.is_empty() => html! { <p class="text-base-content/60 text-sm">{"No sprays assigned."}</p> },
                    Some(names) => html! {
                        <div class="flex flex-wrap gap-2">
                            {for names.into_iter().map(|name| html! { <span class="badge badge-success badge-outline">{name}</span> })}
                        </div>
                    },
                }}
            </div>
            <VersionTable rows={disease_metrics(disease)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ManageProps {
    disease: Disease,
    sprays: Option<Vec<Spray>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(ManageSpraysDialog)]
fn manage_sprays_dialog(props: &ManageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let selection = {
        let initial = props.disease.all_spray_ids.clone();
        use_state(move || initial)
    };
    let busy = use_state(|| false);

    let on_save = {
        let selection = selection.clone();
        let busy = busy.clone();
        let id = props.disease.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let toast = notify(&dispatch, "Saving spray data...", ToastKind::Loading);
            busy.set(true);
            let chosen = (*selection).clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match update_sprays(&ctx.client, id, chosen).await {
                    Ok(_) => {
                        settle(&dispatch, toast, "Disease sprays updated successfully!", ToastKind::Success);
                        on_saved.emit(());
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
            <button class="btn btn-primary btn-sm" disabled={*busy || props.sprays.is_none()} onclick={on_save}>{"Save"}</button>
        </>
    };

    html! {
        <Modal open=true title={format!("Manage Sprays for {}", props.disease.name)} on_close={props.on_close.clone()} busy={*busy} footer={footer}>
            {match props.sprays.as_deref() {
                None => html! { <LoadingPanel label="Loading sprays..." /> },
                Some([]) => html! { <EmptyRow message="No sprays available." /> },
                Some(sprays) => html! {
                    <ul class="max-h-80 space-y-1 overflow-y-auto">
                        {for sprays.iter().map(|spray| {
                            let spray_id = spray.id;
                            let on_toggle = {
                                let selection = selection.clone();
                                Callback::from(move |_: Event| {
                                    let mut next = (*selection).clone();
                                    toggle(&mut next, spray_id);
                                    selection.set(next);
                                })
                            };
                            html! {
                                <li>
                                    <label class="label cursor-pointer justify-start gap-3">
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-sm"
                                            checked={selection.contains(&spray_id)}
                                            disabled={*busy}
                                            onchange={on_toggle}
                                        />
                                        <span>{spray.name.clone()}</span>
                                    </label>
                                </li>
                            }
                        })}
                    </ul>
                },
            }}
        </Modal>
    }
}
