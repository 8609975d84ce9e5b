//! Login form.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session;
use crate::core::store::{app_dispatch, notify};
use crate::core::toast::ToastKind;
use crate::features::login::api::login;
use crate::features::login::logic::{INVALID_CREDENTIALS, LOGIN_SUCCESS, LoginForm};

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LoginForm {
                email: value,
                ..(*form).clone()
            });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LoginForm {
                password: value,
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(ctx) = api_ctx.clone() else {
                error.set(Some("Missing API context.".to_string()));
                return;
            };
            error.set(None);
            busy.set(true);
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                let dispatch = app_dispatch();
                match login(&ctx.client, &request).await {
                    Ok(response) => {
                        session::sign_in(
                            &dispatch,
                            response.token.as_deref(),
                            &response.user,
                            ctx.token_ttl_secs(),
                        );
                        let message = response.message.unwrap_or_else(|| LOGIN_SUCCESS.to_string());
                        notify(&dispatch, message, ToastKind::Success);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(failure) => {
                        let message = if failure.message.is_empty() {
                            INVALID_CREDENTIALS.to_string()
                        } else {
                            failure.message
                        };
                        notify(&dispatch, message.clone(), ToastKind::Error);
                        error.set(Some(message));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="card bg-base-100 login-card shadow" onsubmit={on_submit}>
                <h1 class="brand">{"AGRIBOT"}</h1>
                <p class="muted">{"Sign in to the admin console"}</p>
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    class="input input-bordered w-full"
                    placeholder="Enter your email"
                    value={form.email.clone()}
                    disabled={*busy}
                    oninput={on_email}
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    class="input input-bordered w-full"
                    placeholder="Enter your password"
                    value={form.password.clone()}
                    disabled={*busy}
                    oninput={on_password}
                />
                if let Some(message) = (*error).clone() {
                    <p class="text-error" role="alert">{message}</p>
                }
                <button class="btn btn-primary" type="submit" disabled={*busy}>
                    {if *busy { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
