//! App-wide yewdux store.
//!
//! # Design
//! - Only the session flags and the toast queue are process-wide; page data
//!   stays in component state.
//! - Toast callbacks are taken out of the store inside the reducer and fired
//!   after it returns, so a callback may dispatch again safely.

use crate::core::auth::SessionState;
use crate::core::toast::{ToastId, ToastKind, ToastQueue};
use yew::Callback;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Action carried by confirm toasts.
pub type ToastAction = Callback<()>;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Login state consumed by the route guard.
    pub session: SessionState,
    /// Visible toasts.
    pub toasts: ToastQueue<ToastAction>,
}

/// Dispatcher for the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Push a toast with the default timeout.
pub fn notify(dispatch: &Dispatch<AppStore>, message: impl Into<String>, kind: ToastKind) -> ToastId {
    notify_with_timeout(dispatch, message, kind, None)
}

/// Push a toast with an explicit timeout.
pub fn notify_with_timeout(
    dispatch: &Dispatch<AppStore>,
    message: impl Into<String>,
    kind: ToastKind,
    timeout_ms: Option<u32>,
) -> ToastId {
    let message = message.into();
    let mut id = 0;
    dispatch.reduce_mut(|store| {
        id = store.toasts.notify(message, kind, timeout_ms);
    });
    id
}

/// Show a confirm prompt; exactly one of the callbacks fires later.
pub fn confirm(
    dispatch: &Dispatch<AppStore>,
    message: impl Into<String>,
    on_confirm: ToastAction,
    on_cancel: Option<ToastAction>,
) -> ToastId {
    let message = message.into();
    let mut id = 0;
    dispatch.reduce_mut(|store| {
        id = store.toasts.confirm(message, on_confirm, on_cancel);
    });
    id
}

/// Dismiss a toast, firing a confirm prompt's cancel action.
pub fn dismiss(dispatch: &Dispatch<AppStore>, id: ToastId) {
    let mut action = None;
    dispatch.reduce_mut(|store| {
        action = store.toasts.dismiss(id);
    });
    if let Some(action) = action {
        action.emit(());
    }
}

/// Confirm a prompt, firing its confirm action.
pub fn accept(dispatch: &Dispatch<AppStore>, id: ToastId) {
    let mut action = None;
    dispatch.reduce_mut(|store| {
        action = store.toasts.accept(id);
    });
    if let Some(action) = action {
        action.emit(());
    }
}

/// Settle a loading toast with its outcome; pushes a fresh toast when the
/// loading one was already dismissed.
pub fn settle(
    dispatch: &Dispatch<AppStore>,
    id: ToastId,
    message: impl Into<String>,
    kind: ToastKind,
) {
    let message = message.into();
    dispatch.reduce_mut(|store| {
        if !store.toasts.replace(id, message.clone(), kind) {
            store.toasts.notify(message, kind, None);
        }
    });
}

/// Replace the session flags.
pub fn set_session(dispatch: &Dispatch<AppStore>, state: SessionState) {
    dispatch.reduce_mut(|store| store.session = state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, ToastAction) {
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        (hits, Callback::from(move |()| seen.set(seen.get() + 1)))
    }

    #[test]
    fn confirm_then_accept_fires_only_confirm() {
        let dispatch = Dispatch::<AppStore>::new();
        let (confirmed, on_confirm) = counter();
        let (cancelled, on_cancel) = counter();
        let id = confirm(&dispatch, "Delete?", on_confirm, Some(on_cancel));
        accept(&dispatch, id);
        dismiss(&dispatch, id);
        assert_eq!(confirmed.get(), 1);
        assert_eq!(cancelled.get(), 0);
        assert!(dispatch.get().toasts.get(id).is_none());
    }

    #[test]
    fn settle_reuses_or_recreates_toast() {
        let dispatch = Dispatch::<AppStore>::new();
        let id = notify(&dispatch, "Saving...", ToastKind::Loading);
        settle(&dispatch, id, "Saved", ToastKind::Success);
        assert_eq!(
            dispatch.get().toasts.get(id).map(|t| t.message.clone()),
            Some("Saved".to_string())
        );
        dismiss(&dispatch, id);
        settle(&dispatch, id, "Saved again", ToastKind::Success);
        assert!(
            dispatch
                .get()
                .toasts
                .toasts()
                .iter()
                .any(|t| t.message == "Saved again")
        );
    }
}
