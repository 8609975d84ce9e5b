//! Settings page: profile, social links, and sign-out.

use agribot_api_models::{SocialLinks, User};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session;
use crate::components::status::{EmptyRow, ErrorPanel, LoadingPanel};
use crate::core::store::{app_dispatch, notify, settle};
use crate::core::toast::ToastKind;
use crate::features::settings::api::{fetch_user, update_links, update_profile};
use crate::features::settings::logic::{
    DEFAULT_PROFILE_IMAGE, ProfileForm, SettingsTab, links_from_user,
};
use crate::services::files::selected_files;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let user = use_state(|| None as Option<User>);
    let error = use_state(|| None as Option<String>);
    let reload = use_state(|| 0_u32);
    let tab = use_state(SettingsTab::default);
    let cached_id = use_memo(|_| session::profile().map(|profile| profile.id), ());

    {
        let user = user.clone();
        let error = error.clone();
        let cached_id = *cached_id;
        use_effect_with_deps(
            move |_| {
                if let (Some(ctx), Some(id)) = (api_ctx, cached_id) {
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        match fetch_user(&ctx.client, id).await {
                            Ok(loaded) => user.set(Some(loaded)),
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

    if cached_id.is_none() {
        return html! { <EmptyRow message="No signed-in profile found. Please log in again." /> };
    }
    if let Some(message) = (*error).clone() {
        return html! { <ErrorPanel message={format!("Error: {message}")} on_retry={refresh} /> };
    }
    let Some(account) = (*user).clone() else {
        return html! { <LoadingPanel /> };
    };

    html! {
        <div class="space-y-4 p-6">
            <h2 class="text-xl font-semibold">{"Settings"}</h2>
            <div role="tablist" class="tabs tabs-bordered">
                {for SettingsTab::ALL.iter().map(|item| {
                    let item = *item;
                    let tab_handle = tab.clone();
                    html! {
                        <button
                            role="tab"
                            class={classes!("tab", (item == *tab).then_some("tab-active"))}
                            onclick={Callback::from(move |_: MouseEvent| tab_handle.set(item))}
                        >{item.label()}</button>
                    }
                })}
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    {match *tab {
                        SettingsTab::Profile => html! { <ProfileTab user={account} on_saved={refresh} /> },
                        SettingsTab::Links => html! { <LinksTab user={account} on_saved={refresh} /> },
                        SettingsTab::Logout => html! { <LogoutTab /> },
                    }}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TabProps {
    user: User,
    on_saved: Callback<()>,
}

#[function_component(ProfileTab)]
fn profile_tab(props: &TabProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = {
        let initial = ProfileForm::from_user(&props.user);
        use_state(move || initial)
    };
    let avatar = use_state(|| None as Option<File>);
    let busy = use_state(|| false);

    let text_input = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_username = text_input(|form, value| form.username = value);
    let on_email = text_input(|form, value| form.email = value);
    let on_bio = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(ProfileForm {
                bio: value,
                ..(*form).clone()
            });
        })
    };
    let on_avatar = {
        let avatar = avatar.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            avatar.set(selected_files(&input).into_iter().next());
        })
    };
    let on_submit = {
        let form = form.clone();
        let avatar = avatar.clone();
        let busy = busy.clone();
        let id = props.user.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let toast = notify(&dispatch, "Updating user information...", ToastKind::Loading);
            busy.set(true);
            let submitted = (*form).clone();
            let file = (*avatar).clone();
            let avatar = avatar.clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match update_profile(&ctx.client, id, &submitted, file.as_ref()).await {
                    Ok(envelope) => {
                        session::sign_in(&dispatch, None, &envelope.user, ctx.token_ttl_secs());
                        let message = envelope
                            .message
                            .unwrap_or_else(|| "Profile updated successfully!".to_string());
                        settle(&dispatch, toast, message, ToastKind::Success);
                        avatar.set(None);
                        on_saved.emit(());
                    }
                    Err(failure) => settle(&dispatch, toast, failure.message, ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let image = props
        .user
        .profile_image
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());

    html! {
        <form class="flex flex-col gap-4" onsubmit={on_submit}>
            <div class="flex items-center gap-4">
                <img class="h-20 w-20 rounded-full object-cover" src={image} alt="Profile" />
                <div>
                    <p class="font-semibold">{props.user.display_name().to_string()}</p>
                    <p class="text-base-content/60 text-sm">{props.user.role.clone()}</p>
                </div>
            </div>
            <label class="form-control">
                <span class="label-text">{"Profile Image"}</span>
                <input class="file-input file-input-bordered" type="file" accept="image/*" disabled={*busy} onchange={on_avatar} />
            </label>
            <label class="form-control">
                <span class="label-text">{"Username"}</span>
                <input class="input input-bordered" value={form.username.clone()} disabled={*busy} oninput={on_username} />
            </label>
            <label class="form-control">
                <span class="label-text">{"Email"}</span>
                <input class="input input-bordered" type="email" value={form.email.clone()} disabled={*busy} oninput={on_email} />
            </label>
            <label class="form-control">
                <span class="label-text">{"Bio"}</span>
                <textarea class="textarea textarea-bordered" rows="4" value={form.bio.clone()} disabled={*busy} oninput={on_bio} />
            </label>
            <div>
                <button class="btn btn-primary btn-sm" type="submit" disabled={*busy}>{"Save Profile"}</button>
            </div>
        </form>
    }
}

#[function_component(LinksTab)]
fn links_tab(props: &TabProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let links = {
        let initial = links_from_user(&props.user);
        use_state(move || initial)
    };
    let busy = use_state(|| false);

    let field = |apply: fn(&mut SocialLinks, String)| {
        let links = links.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*links).clone();
            apply(&mut next, value);
            links.set(next);
        })
    };
    let on_facebook = field(|links, value| links.facebook = value);
    let on_linkedin = field(|links, value| links.linkedin = value);
    let on_github = field(|links, value| links.github = value);
    let on_email = field(|links, value| links.email = value);

    let on_submit = {
        let links = links.clone();
        let busy = busy.clone();
        let id = props.user.id;
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = api_ctx.clone() else {
                return;
            };
            let dispatch = app_dispatch();
            let toast = notify(&dispatch, "Updating user social links...", ToastKind::Loading);
            busy.set(true);
            let submitted = (*links).clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            yew::platform::spawn_local(async move {
                match update_links(&ctx.client, id, &submitted).await {
                    Ok(ack) => {
                        let message = ack
                            .message
                            .unwrap_or_else(|| "Social links updated successfully!".to_string());
                        settle(&dispatch, toast, message, ToastKind::Success);
                        on_saved.emit(());
                    }
                    Err(failure) => settle(&dispatch, toast, failure.message, ToastKind::Error),
                }
                busy.set(false);
            });
        })
    };

    let rows = [
        ("Facebook", links.facebook.clone(), on_facebook),
        ("LinkedIn", links.linkedin.clone(), on_linkedin),
        ("GitHub", links.github.clone(), on_github),
        ("Email", links.email.clone(), on_email),
    ];

    html! {
        <form class="flex flex-col gap-4" onsubmit={on_submit}>
            {for rows.into_iter().map(|(label, value, oninput)| html! {
                <label class="form-control">
                    <span class="label-text">{label}</span>
                    <input class="input input-bordered" value={value} disabled={*busy} oninput={oninput} />
                </label>
            })}
            <div>
                <button class="btn btn-primary btn-sm" type="submit" disabled={*busy}>{"Save Links"}</button>
            </div>
        </form>
    }
}

#[function_component(LogoutTab)]
fn logout_tab() -> Html {
    let navigator = use_navigator();
    let on_logout = Callback::from(move |_: MouseEvent| {
        session::sign_out(&app_dispatch());
        notify(&app_dispatch(), "Logged out successfully.", ToastKind::Info);
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Dashboard);
        }
    });

    html! {
        <div class="flex flex-col items-start gap-3">
            <p>{"Sign out of the AGRIBOT admin console on this device."}</p>
            <button class="btn btn-error btn-sm" onclick={on_logout}>{"Logout"}</button>
        </div>
    }
}
