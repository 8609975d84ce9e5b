//! Application chrome: sidebar, header title, quick search, notifications.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::core::search::{Direction, SearchDestination, SearchTarget, cycle_highlight, search_targets};
use crate::features::notifications::view::NotificationBell;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub active: Route,
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let bell_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| nav_open.set(!*nav_open))
    };
    let on_bell = {
        let bell_open = bell_open.clone();
        Callback::from(move |open: bool| bell_open.set(open))
    };
    let open_notifications = {
        let bell_open = bell_open.clone();
        Callback::from(move |()| bell_open.set(true))
    };
    let title = props.active.title();

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="btn btn-ghost btn-sm mobile-only" onclick={toggle_nav.clone()} aria-label="Close navigation">{"✕"}</button>
                    <strong>{"AGRIBOT"}</strong>
                    <span class="muted">{"Admin"}</span>
                </div>
                <nav>
                    {for Route::NAV.iter().map(|route| nav_item(route, &props.active))}
                </nav>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="btn btn-ghost btn-sm mobile-only" aria-label="Open navigation" onclick={toggle_nav}>{"☰"}</button>
                    <div class="breadcrumb">
                        <span>{"Admin"}</span>
                        if props.active != Route::Dashboard {
                            <span>{format!(" / {title}")}</span>
                        }
                    </div>
                    <QuickSearch on_notifications={open_notifications} />
                    <NotificationBell open={*bell_open} on_toggle={on_bell} />
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: &Route, active: &Route) -> Html {
    let classes = classes!("nav-item", (route == active).then_some("active"));
    html! {
        <Link<Route> to={route.clone()} classes={classes}>{route.title()}</Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
struct QuickSearchProps {
    on_notifications: Callback<()>,
}

#[function_component(QuickSearch)]
fn quick_search(props: &QuickSearchProps) -> Html {
    let navigator = use_navigator();
    let query = use_state(String::new);
    let highlight = use_state(|| 0_usize);
    let focused = use_state(|| false);
    let results = search_targets(&query);

    let activate = {
        let query = query.clone();
        let highlight = highlight.clone();
        let on_notifications = props.on_notifications.clone();
        Callback::from(move |target: SearchTarget| {
            match target.destination {
                SearchDestination::Path(path) => {
                    if let Some(navigator) = navigator.clone() {
                        navigator.push(&Route::recognize(path).unwrap_or(Route::NotFound));
                    }
                }
                SearchDestination::Notifications => on_notifications.emit(()),
            }
            query.set(String::new());
            highlight.set(0);
        })
    };

    let oninput = {
        let query = query.clone();
        let highlight = highlight.clone();
        Callback::from(move |event: InputEvent| {
            query.set(event.target_unchecked_into::<HtmlInputElement>().value());
            highlight.set(0);
        })
    };
    let onkeydown = {
        let results = results.clone();
        let highlight = highlight.clone();
        let query = query.clone();
        let activate = activate.clone();
        Callback::from(move |event: KeyboardEvent| {
            if results.is_empty() {
                return;
            }
            match event.key().as_str() {
                "ArrowDown" | "ArrowUp" => {
                    event.prevent_default();
                    let direction = if event.key() == "ArrowDown" {
                        Direction::Down
                    } else {
                        Direction::Up
                    };
                    highlight.set(cycle_highlight(*highlight, results.len(), direction));
                }
                "Enter" => {
                    event.prevent_default();
                    let index = if results.len() == 1 { 0 } else { *highlight };
                    if let Some(target) = results.get(index) {
                        activate.emit(*target);
                    }
                }
                "Escape" => query.set(String::new()),
                _ => {}
            }
        })
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    html! {
        <div class="quick-search">
            <input
                type="search"
                placeholder="Search pages..."
                aria-label="Quick search"
                value={(*query).clone()}
                oninput={oninput}
                onkeydown={onkeydown}
                onfocus={onfocus}
                onblur={onblur}
            />
            if *focused && !results.is_empty() {
                <ul class="dropdown card">
                    {for results.iter().enumerate().map(|(index, target)| {
                        let target = *target;
                        let onmousedown = activate.reform(move |_: MouseEvent| target);
                        let kind = match target.destination {
                            SearchDestination::Path(_) => "link",
                            SearchDestination::Notifications => "modal",
                        };
                        html! {
                            <li class={classes!("result", (index == *highlight).then_some("active"))} onmousedown={onmousedown}>
                                <div>
                                    <strong>{target.label}</strong>
                                    <small class="muted">{target.description}</small>
                                </div>
                                <span class="pill subtle">{kind}</span>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
