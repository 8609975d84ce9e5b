//! Accounts page with the message editor and config reports.

use agribot_api_models::{MessageRequest, User};
use chrono::Local;
use gloo::console;
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::modal::Modal;
use crate::components::pagination::Pager;
use crate::components::search::SearchInput;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::pagination::{page_in_range, paginate};
use crate::core::store::{app_dispatch, notify, settle};
use crate::core::toast::ToastKind;
use crate::features::accounts::api::{fetch_users, send_message};
use crate::features::accounts::logic::{
    Edit, PAGE_SIZE, REPORT_FILE_NAME, RobotConfig, TEMPLATES, build_email_html, color_selection,
    config_json, filter_accounts, insert_at, parse_config, validate_message, wrap_selection,
};
use crate::features::diseases::logic::search_param;
use crate::features::settings::logic::DEFAULT_PROFILE_IMAGE;
use crate::services::files::download_json;

fn initial_search() -> String {
    gloo::utils::window()
        .location()
        .search()
        .map(|query| search_param(&query))
        .unwrap_or_default()
}

fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}

#[function_component(AccountsPage)]
pub(crate) fn accounts_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let users = use_state(|| None as Option<Vec<User>>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let search = use_state(initial_search);
    let admins = use_state(|| false);
    let page = use_state(|| 1_usize);
    let messaging = use_state(|| None as Option<User>);
    let reporting = use_state(|| None as Option<User>);

    {
        let users = users.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_users(&ctx.client).await {
                            Ok(loaded) => users.set(Some(loaded)),
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
    let Some(list) = (*users).clone() else {
        return html! { <LoadingPanel /> };
    };

    let filtered = filter_accounts(&list, &search, *admins);
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
    let on_toggle_admins = {
        let admins = admins.clone();
        let page = page.clone();
        Callback::from(move |_: Event| {
            admins.set(!*admins);
            page.set(1);
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };
    let close_message = {
        let messaging = messaging.clone();
        Callback::from(move |()| messaging.set(None))
    };
    let close_report = {
        let reporting = reporting.clone();
        Callback::from(move |()| reporting.set(None))
    };

    html! {
        <div class="space-y-4 p-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-xl font-semibold">{"Accounts"}</h2>
                <div class="flex items-center gap-3">
                    <SearchInput value={(*search).clone()} placeholder="Search by name or email..." on_change={on_search} />
                    <label class="label cursor-pointer gap-2">
                        <span class="label-text">{"Admins"}</span>
                        <input type="checkbox" class="toggle toggle-sm" checked={*admins} onchange={on_toggle_admins} />
                    </label>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body overflow-x-auto">
                    if filtered.is_empty() {
                        <EmptyRow message="No users found." />
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"User"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Joined"}</th>
                                    <th />
                                </tr>
                            </thead>
                            <tbody>
                                {for current.items.iter().map(|user| {
                                    let avatar = user.profile_image.clone().unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());
                                    let joined = user
                                        .created_at
                                        .map(|at| at.with_timezone(&Local).format("%b %d, %Y").to_string())
                                        .unwrap_or_default();
                                    let on_message = {
                                        let messaging = messaging.clone();
                                        let user = user.clone();
                                        Callback::from(move |_: MouseEvent| messaging.set(Some(user.clone())))
                                    };
                                    let on_report = {
                                        let reporting = reporting.clone();
                                        let user = user.clone();
                                        Callback::from(move |_: MouseEvent| reporting.set(Some(user.clone())))
                                    };
                                    html! {
                                        <tr class="hover">
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <img class="h-9 w-9 rounded-full object-cover" src={avatar} alt={user.display_name().to_string()} />
                                                    <div>
                                                        <p class="font-medium">{user.display_name().to_string()}</p>
                                                        <p class="text-base-content/60 text-xs">{user.role.clone()}</p>
                                                    </div>
                                                </div>
                                            </td>
                                            <td>{user.email.clone()}</td>
                                            <td>{joined}</td>
                                            <td class="flex gap-2">
                                                <button class="btn btn-ghost btn-xs" onclick={on_message}>{"Message"}</button>
                                                <button class="btn btn-ghost btn-xs" onclick={on_report}>{"Config"}</button>
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
            if let Some(user) = (*messaging).clone() {
                <MessageDialog user={user} on_close={close_message} />
            }
            if let Some(user) = (*reporting).clone() {
                <ConfigDialog user={user} on_close={close_report} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DialogProps {
    user: User,
    on_close: Callback<()>,
}

fn selection(area: &HtmlTextAreaElement) -> (u32, u32) {
    let start = area.selection_start().ok().flatten().unwrap_or(0);
    let end = area.selection_end().ok().flatten().unwrap_or(start);
    (start, end)
}

#[function_component(MessageDialog)]
fn message_dialog(props: &DialogProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let message = use_state(String::new);
    let caret = use_state(|| None as Option<u32>);
    let color = use_state(|| "#4ade80".to_string());
    let busy = use_state(|| false);
    let editor = use_node_ref();

    {
        let editor = editor.clone();
        use_effect_with_deps(
            move |caret: &Option<u32>| {
                if let (Some(position), Some(area)) = (*caret, editor.cast::<HtmlTextAreaElement>()) {
                    if area.focus().is_err() {
                        gloo::console::warn!("unable to focus message editor");
                    }
                    if area.set_selection_range(position, position).is_err() {
                        gloo::console::warn!("unable to restore editor caret");
                    }
                }
                || ()
            },
            *caret,
        );
    }

    let apply = {
        let message = message.clone();
        let caret = caret.clone();
        move |edit: Edit| {
            message.set(edit.text);
            caret.set(Some(edit.caret));
        }
    };
    let on_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            message.set(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_keydown = {
        let apply = apply.clone();
        Callback::from(move |event: KeyboardEvent| {
            if !(event.ctrl_key() || event.meta_key()) {
                return;
            }
            let tag = match event.key().to_lowercase().as_str() {
                "b" => "b",
                "i" => "i",
                _ => return,
            };
            event.prevent_default();
            let area = event.target_unchecked_into::<HtmlTextAreaElement>();
            let (start, end) = selection(&area);
            apply(wrap_selection(&area.value(), start, end, tag));
        })
    };
    let format_button = |tag: &'static str| {
        let editor = editor.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(area) = editor.cast::<HtmlTextAreaElement>() {
                let (start, end) = selection(&area);
                apply(wrap_selection(&area.value(), start, end, tag));
            }
        })
    };
    let on_template = {
        let editor = editor.clone();
        let apply = apply.clone();
        Callback::from(move |event: Event| {
            let select = event.target_unchecked_into::<HtmlSelectElement>();
            let Some((_, body)) = TEMPLATES.iter().find(|(label, _)| *label == select.value()) else {
                return;
            };
            select.set_value("");
            if let Some(area) = editor.cast::<HtmlTextAreaElement>() {
                let (start, end) = selection(&area);
                apply(insert_at(&area.value(), start, end, body));
            }
        })
    };
    let on_color = {
        let editor = editor.clone();
        let color = color.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            if let Some(area) = editor.cast::<HtmlTextAreaElement>() {
                let (start, end) = selection(&area);
                if let Some(edit) = color_selection(&area.value(), start, end, &value) {
                    apply(edit);
                }
            }
            color.set(value);
        })
    };
    let on_send = {
        let message = message.clone();
        let busy = busy.clone();
        let user = props.user.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = app_dispatch();
            let text = match validate_message(&message) {
                Ok(text) => text.to_string(),
                Err(err) => {
                    notify(&dispatch, err.to_string(), ToastKind::Error);
                    return;
                }
            };
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let request = MessageRequest {
                user_id: user.id,
                html: build_email_html(user.display_name(), &text, &today()),
                message: text,
            };
            busy.set(true);
            let toast = notify(&dispatch, "Sending email message...", ToastKind::Loading);
            let message = message.clone();
            let busy = busy.clone();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                match send_message(&ctx.client, &request).await {
                    Ok(_) => {
                        settle(&dispatch, toast, "Message sent successfully", ToastKind::Success);
                        message.set(String::new());
                        on_close.emit(());
                    }
                    Err(failure) => {
                        console::error!(format!("Send message error: {failure}"));
                        settle(&dispatch, toast, failure.message, ToastKind::Error);
                    }
                }
                busy.set(false);
            });
        })
    };

    let footer = html! {
        <>
            <button class="btn btn-ghost btn-sm" disabled={*busy} onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            <button class="btn btn-primary btn-sm" disabled={*busy} onclick={on_send}>{"Send"}</button>
        </>
    };

    html! {
        <Modal
            open=true
            title={format!("Message {}", props.user.display_name())}
            on_close={props.on_close.clone()}
            busy={*busy}
            footer={footer}
        >
            <div class="flex flex-col gap-3">
                <div class="flex flex-wrap items-center gap-2">
                    <select class="select select-sm" onchange={on_template} disabled={*busy}>
                        <option value="" selected=true>{"Templates"}</option>
                        {for TEMPLATES.iter().map(|(label, _)| html! { <option value={*label}>{*label}</option> })}
                    </select>
                    <button class="btn btn-ghost btn-sm font-bold" title="Bold (Ctrl+B)" onclick={format_button("b")}>{"B"}</button>
                    <button class="btn btn-ghost btn-sm italic" title="Italic (Ctrl+I)" onclick={format_button("i")}>{"I"}</button>
                    <input type="color" class="h-8 w-10 cursor-pointer" title="Color selection" value={(*color).clone()} onchange={on_color} />
                </div>
                <textarea
                    ref={editor}
                    class="textarea textarea-bordered min-h-48 font-mono"
                    placeholder="Write your message..."
                    value={(*message).clone()}
                    disabled={*busy}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <p class="text-base-content/60 text-xs">{"HTML tags are sent as written."}</p>
            </div>
        </Modal>
    }
}

fn config_report(config: &RobotConfig) -> Html {
    let models = [
        ("Object Detection", &config.object_detection, &config.object_detection_confidence),
        ("Stage Classification", &config.stage_classification, &config.stage_classification_confidence),
        ("Disease Segmentation", &config.disease_segmentation, &config.disease_segmentation_confidence),
    ];
    html! {
        <div class="space-y-4">
            <p class="text-base-content/60 text-sm">
                {format!("Generated: {} | Plants Detected: {}", today(), config.detected_plants.len())}
            </p>
            <div class="grid gap-2 sm:grid-cols-3">
                {for models.iter().map(|(label, model, confidence)| html! {
                    <div class="rounded bg-base-200 p-3">
                        <p class="text-sm font-semibold">{*label}</p>
                        <p class="text-sm">{format!("{model} ({confidence})")}</p>
                    </div>
                })}
            </div>
            <div class="grid grid-cols-2 gap-2 sm:grid-cols-4">
                {for config.sprays.channels().into_iter().map(|channel| html! {
                    <div class={classes!("rounded", "border", "px-2", "py-1", "text-sm", if channel.active { "border-info" } else { "border-base-300" })}>
                        <span>{channel.spray}</span>
                        <span class="text-base-content/60">{format!(" ({} secs)", channel.duration)}</span>
                    </div>
                })}
            </div>
            <div class="rounded bg-base-200 p-3 text-sm">
                <p class="font-semibold">{format!("Schedule: {}", config.schedule.frequency)}</p>
                <p>{config.schedule.days.join(", ")}</p>
                {for config.schedule.runs.iter().map(|run| html! { <p>{format!("{} - {}", run.time, run.upto)}</p> })}
            </div>
            <table class="table table-sm">
                <thead>
                    <tr><th>{"Plant"}</th><th>{"Detected"}</th><th>{"Diseases"}</th><th>{"Status"}</th></tr>
                </thead>
                <tbody>
                    {for config.detected_plants.iter().map(|plant| html! {
                        <tr>
                            <td class="flex items-center gap-2">
                                if !plant.image.is_empty() {
                                    <img class="h-8 w-8 rounded object-cover" src={plant.image.clone()} alt={plant.key.clone()} />
                                }
                                {plant.key.clone()}
                            </td>
                            <td>{plant.timestamp.clone()}</td>
                            <td>
                                {for plant.active_diseases().into_iter().map(|(name, times)| html! {
                                    <p>{name}<span class="text-base-content/60">{format!(" {times}")}</span></p>
                                })}
                            </td>
                            <td>
                                if plant.disabled {
                                    <span class="badge badge-ghost badge-sm">{"Disabled"}</span>
                                } else if plant.will_spray_early {
                                    <span class="badge badge-warning badge-sm">{"Early spray"}</span>
                                } else {
                                    <span class="badge badge-success badge-sm">{"Active"}</span>
                                }
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ConfigDialog)]
fn config_dialog(props: &DialogProps) -> Html {
    let config = parse_config(props.user.config.as_ref());
    let on_download = {
        let raw = props.user.config.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(raw) = raw.as_ref() else {
                return;
            };
            if let Err(err) = download_json(REPORT_FILE_NAME, &config_json(raw)) {
                notify(&app_dispatch(), format!("Download failed: {err}"), ToastKind::Error);
            }
        })
    };
    let footer = html! {
        <button class="btn btn-primary btn-sm" disabled={config.is_none()} onclick={on_download}>{"Download"}</button>
    };

    html! {
        <Modal
            open=true
            title={format!("{} Config", props.user.display_name())}
            on_close={props.on_close.clone()}
            footer={footer}
        >
            {match config {
                Some(config) => config_report(&config),
                None => html! { <EmptyRow message="This user has not uploaded a configuration." /> },
            }}
        </Modal>
    }
}
