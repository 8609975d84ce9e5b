//! Notification bell, dropdown, and detail dialog.

use agribot_api_models::Notification;
use chrono::Local;
use gloo::console;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::session;
use crate::components::modal::Modal;
use crate::components::pagination::Pager;
use crate::core::pagination::{page_in_range, paginate};
use crate::core::store::{app_dispatch, notify};
use crate::core::toast::ToastKind;
use crate::features::notifications::api::{fetch_notifications, mark_read};
use crate::features::notifications::logic::{self, PAGE_SIZE, preview, unread_count};

fn timestamp(notification: &Notification) -> String {
    notification
        .created_at
        .map(|at| at.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub(crate) struct BellProps {
    pub open: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(NotificationBell)]
pub(crate) fn notification_bell(props: &BellProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let notifications = use_state(Vec::<Notification>::new);
    let loading = use_state(|| false);
    let page = use_state(|| 1_usize);
    let selected = use_state(|| None as Option<Notification>);

    {
        let api_ctx = api_ctx.clone();
        let notifications = notifications.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let profile = session::profile();
                if let (Some(ctx), Some(user)) = (api_ctx, profile) {
                    loading.set(true);
                    yew::platform::spawn_local(async move {
                        match fetch_notifications(&ctx.client, user.id).await {
                            Ok(list) => notifications.set(list),
                            Err(err) => {
                                notify(&app_dispatch(), err.message, ToastKind::Error);
                            }
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
            (),
        );
    }

    let open_item = {
        let api_ctx = api_ctx.clone();
        let notifications = notifications.clone();
        let selected = selected.clone();
        Callback::from(move |item: Notification| {
            let mut list = (*notifications).clone();
            if logic::mark_read(&mut list, item.id) {
                notifications.set(list);
                if let Some(ctx) = api_ctx.clone() {
                    let id = item.id;
                    yew::platform::spawn_local(async move {
                        if let Err(err) = mark_read(&ctx.client, id).await {
                            console::error!(format!("Failed to mark read: {err}"));
                        }
                    });
                }
            }
            selected.set(Some(Notification {
                is_read: true,
                ..item
            }));
        })
    };

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let open = props.open;
        Callback::from(move |_: MouseEvent| on_toggle.emit(!open))
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };
    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let unread = unread_count(&notifications);
    let page_no = page_in_range(&notifications, *page, PAGE_SIZE);
    let current = paginate(&notifications, page_no, PAGE_SIZE);
    let dropdown = if props.open {
        let body = if *loading {
            html! { <p class="muted">{"Loading..."}</p> }
        } else if notifications.is_empty() {
            html! { <p class="muted">{"No notifications found"}</p> }
        } else {
            html! {
                <ul class="notification-list">
                    {for current.items.iter().map(|item| {
                        let onclick = {
                            let open_item = open_item.clone();
                            let item = item.clone();
                            Callback::from(move |_: MouseEvent| open_item.emit(item.clone()))
                        };
                        html! {
                            <li class={classes!("notification", (!item.is_read).then_some("unread"))} onclick={onclick}>
                                <div>
                                    <strong>{item.title.clone()}</strong>
                                    <span class="muted">{preview(&item.message)}</span>
                                    <small class="muted">{timestamp(item)}</small>
                                </div>
                                if !item.is_read {
                                    <span class="dot" />
                                }
                            </li>
                        }
                    })}
                </ul>
            }
        };
        html! {
            <div class="dropdown card">
                <header><strong>{"Notifications"}</strong></header>
                {body}
                <Pager page={page_no} total_pages={current.total_pages} on_change={on_page} />
            </div>
        }
    } else {
        html! {}
    };

    let detail = (*selected).clone().map(|item| {
        html! {
            <Modal open=true title={item.title.clone()} on_close={close_modal.clone()}>
                <p>{item.message.clone()}</p>
                <small class="muted">{format!("{} · {}", item.kind, timestamp(&item))}</small>
            </Modal>
        }
    });

    html! {
        <div class="notification-bell">
            <button class="btn btn-ghost btn-circle btn-sm" aria-label="Notifications" onclick={toggle}>
                {"🔔"}
                if unread > 0 {
                    <span class="badge">{unread}</span>
                }
            </button>
            {dropdown}
            {for detail}
        </div>
    }
}
