//! Root component: API context, router, session guard, toast host.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::components::shell::AppShell;
use crate::components::status::LoadingPanel;
use crate::components::toast::ToastHost;
use crate::core::auth::{GuardView, guard};
use crate::core::config::AppConfig;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::accounts::view::AccountsPage;
use crate::features::dashboard::view::DashboardPage;
use crate::features::diseases::view::DiseasesPage;
use crate::features::feedback::view::FeedbackPage;
use crate::features::login::view::LoginPage;
use crate::features::logs::view::LogsPage;
use crate::features::model::view::ModelPage;
use crate::features::plants::view::PlantsPage;
use crate::features::settings::view::SettingsPage;
use crate::features::sprays::view::SpraysPage;
pub(crate) use routes::Route;

pub(crate) mod api;
mod routes;
pub(crate) mod session;

#[function_component(AgribotApp)]
fn agribot_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(AppConfig::from_build_env()), ());
    use_effect_with_deps(
        move |_| {
            session::start(&app_dispatch());
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <GuardedRoutes />
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[function_component(GuardedRoutes)]
fn guarded_routes() -> Html {
    let session = use_selector(|store: &AppStore| store.session);
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    match guard(*session, route) {
        GuardView::Placeholder => html! { <LoadingPanel label="Checking session..." /> },
        GuardView::Login => html! { <LoginPage /> },
        GuardView::Page(route) => html! {
            <AppShell active={route.clone()}>
                {render_route(route)}
            </AppShell>
        },
    }
}

fn render_route(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Model => html! { <ModelPage /> },
        Route::Plants => html! { <PlantsPage /> },
        Route::Diseases => html! { <DiseasesPage /> },
        Route::Sprays => html! { <SpraysPage /> },
        Route::Logs => html! { <LogsPage /> },
        Route::Accounts => html! { <AccountsPage /> },
        Route::Feedback => html! { <FeedbackPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! {
            <div class="panel">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Dashboard}>{"Back to dashboard"}</Link<Route>>
            </div>
        },
    }
}

/// Mount the admin UI on `#root`, or on `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AgribotApp>::with_root(root).render();
    } else {
        yew::Renderer::<AgribotApp>::new().render();
    }
}
