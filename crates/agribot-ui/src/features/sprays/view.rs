//! Spray catalogue page.

use agribot_api_models::{EntityId, Spray};
use chrono::Local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::modal::Modal;
use crate::components::pagination::Pager;
use crate::components::search::SearchInput;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::pagination::{page_in_range, paginate};
use crate::core::store::{app_dispatch, confirm, dismiss, notify, settle};
use crate::core::toast::ToastKind;
use crate::features::sprays::api::{delete_spray, fetch_sprays, save_spray};
use crate::features::sprays::logic::{PAGE_SIZE, SprayForm, filter_sprays};

/// Open dialog, if any.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Create,
    Edit(Spray),
    View(Spray),
}

fn stamp(spray: &Spray) -> String {
    spray
        .updated_at
        .or(spray.created_at)
        .map(|at| at.with_timezone(&Local).format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[function_component(SpraysPage)]
pub(crate) fn sprays_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let sprays = use_state(|| None as Option<Vec<Spray>>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(String::new);
    let page = use_state(|| 1_usize);
    let dialog = use_state(|| None as Option<Dialog>);

    {
        let api_ctx = api_ctx.clone();
        let sprays = sprays.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    let dispatch = app_dispatch();
                    let toast = notify(&dispatch, "Fetching all sprays.", ToastKind::Loading);
                    yew::platform::spawn_local(async move {
                        match fetch_sprays(&ctx.client).await {
                            Ok(loaded) => {
                                dismiss(&dispatch, toast);
                                sprays.set(Some(loaded));
                            }
                            Err(failure) => {
                                settle(&dispatch, toast, failure.message.clone(), ToastKind::Error);
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
    let Some(list) = (*sprays).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_sprays(&list, &search);
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
    let open = |next: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            dialog.set(Some(next.clone()));
        })
    };
    let close = {
        let dialog = dialog.clone();
        Callback::from(move |()| dialog.set(None))
    };
    let on_saved = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            dialog.set(None);
            refresh.emit(());
        })
    };
    let on_delete = {
        let refresh = refresh.clone();
        Callback::from(move |id: EntityId| {
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let refresh = refresh.clone();
            let on_confirm = Callback::from(move |()| {
                let ctx = ctx.clone();
                let refresh = refresh.clone();
                let dispatch = app_dispatch();
                let toast = notify(&dispatch, "Deleting spray...", ToastKind::Loading);
                yew::platform::spawn_local(async move {
                    match delete_spray(&ctx.client, id).await {
                        Ok(_) => {
                            settle(&dispatch, toast, "Spray deleted successfully!", ToastKind::Success);
                            refresh.emit(());
                        }
                        Err(_) => settle(&dispatch, toast, "Failed to delete spray", ToastKind::Error),
                    }
                });
            });
            confirm(
                &app_dispatch(),
                "Are you sure you want to delete this spray?",
                on_confirm,
                None,
            );
        })
    };

    html! {
        <div class="space-y-4 p-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-semibold">{"Sprays"}</h2>
                <div class="flex items-center gap-2">
                    <SearchInput value={(*search).clone()} placeholder="Search sprays..." on_change={on_search} />
                    <button class="btn btn-primary btn-sm" onclick={open(Dialog::Create)}>{"Add Spray"}</button>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body overflow-x-auto">
                    if filtered.is_empty() {
                        <EmptyRow message="No sprays found." />
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Active Ingredients"}</th>
                                    <th>{"Updated"}</th>
                                    <th />
                                </tr>
                            </thead>
                            <tbody>
                                {for current.items.iter().map(|spray| {
                                    let id = spray.id;
                                    let delete = on_delete.reform(move |event: MouseEvent| {
                                        event.stop_propagation();
                                        id
                                    });
                                    html! {
                                        <tr class="hover cursor-pointer" onclick={open(Dialog::View(spray.clone()))}>
                                            <td class="font-medium">{spray.name.clone()}</td>
                                            <td class="max-w-xs truncate">{spray.active_ingredients.clone()}</td>
                                            <td>{stamp(spray)}</td>
                                            <td class="flex gap-2">
                                                <button class="btn btn-ghost btn-xs" onclick={open(Dialog::Edit(spray.clone()))}>{"Edit"}</button>
                                                <button class="btn btn-ghost btn-xs text-error" onclick={delete}>{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                    <Pager page={page_no} total_pages={current.total_pages} on_change={on_page} />
                </div>
            </div>
            {match (*dialog).clone() {
                Some(Dialog::Create) => html! {
                    <SprayDialog form={SprayForm::default()} on_close={close} on_saved={on_saved} />
                },
                Some(Dialog::Edit(spray)) => html! {
                    <SprayDialog id={spray.id} form={SprayForm::from_spray(&spray)} on_close={close} on_saved={on_saved} />
                },
                Some(Dialog::View(spray)) => html! {
                    <Modal open=true title={spray.name.clone()} on_close={close}>
                        <div class="space-y-3">
                            <div>
                                <p class="font-medium">{"Description"}</p>
                                <p class="text-base-content/80 whitespace-pre-line">{spray.description.clone()}</p>
                            </div>
                            <div>
                                <p class="font-medium">{"Active Ingredients"}</p>
                                <p class="text-base-content/80 whitespace-pre-line">{spray.active_ingredients.clone()}</p>
                            </div>
                            <p class="text-base-content/60 text-xs">{format!("Last updated {}", stamp(&spray))}</p>
                        </div>
                    </Modal>
                },
                None => html! {},
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SprayDialogProps {
    #[prop_or_default]
    id: Option<EntityId>,
    form: SprayForm,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(SprayDialog)]
fn spray_dialog(props: &SprayDialogProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = {
        let initial = props.form.clone();
        use_state(move || initial)
    };
    let busy = use_state(|| false);

    let text_input = |apply: fn(&mut SprayForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let text_area = |apply: fn(&mut SprayForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = text_input(|form, value| form.name = value);
    let on_description = text_area(|form, value| form.description = value);
    let on_ingredients = text_area(|form, value| form.active_ingredients = value);

    let on_submit = {
        let form = form.clone();
        let busy = busy.clone();
        let id = props.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = app_dispatch();
            let draft = match form.to_draft() {
                Ok(draft) => draft,
                Err(err) => {
                    notify(&dispatch, err.to_string(), ToastKind::Error);
                    return;
                }
            };
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let pending = if id.is_some() { "Saving changes..." } else { "Adding new spray." };
            let toast = notify(&dispatch, pending, ToastKind::Loading);
            busy.set(true);
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match (save_spray(&ctx.client, id, &draft).await, id) {
                    (Ok(_), Some(_)) => {
                        settle(&dispatch, toast, "Spray updated successfully!", ToastKind::Success);
                        on_saved.emit(());
                    }
                    (Ok(_), None) => {
                        settle(&dispatch, toast, "Successfully added new spray!", ToastKind::Success);
                        on_saved.emit(());
                    }
                    (Err(_), Some(_)) => settle(&dispatch, toast, "Failed to update spray", ToastKind::Error),
                    (Err(failure), None) => settle(&dispatch, toast, failure.message, ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let title = if props.id.is_some() { "Edit Spray" } else { "Add Spray" };
    let footer = html! {
        <>
            <button class="btn btn-ghost btn-sm" disabled={*busy} onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button class="btn btn-primary btn-sm" disabled={*busy} onclick={on_submit}>{"Save"}</button>
        </>
    };

    html! {
        <Modal open=true title={title} on_close={props.on_close.clone()} busy={*busy} footer={footer}>
            <div class="flex flex-col gap-3">
                <label class="form-control">
                    <span class="label-text">{"Name"}</span>
                    <input class="input input-bordered" value={form.name.clone()} disabled={*busy} oninput={on_name} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Description"}</span>
                    <textarea class="textarea textarea-bordered" rows="4" value={form.description.clone()} disabled={*busy} oninput={on_description} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Active Ingredients"}</span>
                    <textarea class="textarea textarea-bordered" rows="3" value={form.active_ingredients.clone()} disabled={*busy} oninput={on_ingredients} />
                </label>
            </div>
        </Modal>
    }
}
