//! Routing definitions for the admin UI.
use yew_router::prelude::*;

use crate::core::nav::page_title;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/model")]
    Model,
    #[at("/plants")]
    Plants,
    #[at("/diseases")]
    Diseases,
    #[at("/sprays")]
    Sprays,
    #[at("/logs")]
    Logs,
    #[at("/accounts")]
    Accounts,
    #[at("/feedback")]
    Feedback,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar order.
    pub(crate) const NAV: [Self; 9] = [
        Self::Dashboard,
        Self::Model,
        Self::Plants,
        Self::Diseases,
        Self::Sprays,
        Self::Logs,
        Self::Accounts,
        Self::Feedback,
        Self::Settings,
    ];

    /// Header and sidebar caption.
    pub(crate) fn title(&self) -> &'static str {
        page_title(&self.to_path())
    }
}
