//! Toast queue shared by every page.
//!
//! # Design
//! - The queue is plain data generic over the action type so it can live in the
//!   yewdux store and be tested natively.
//! - Confirm toasts hand their callbacks back to the caller on removal; the
//!   removal happens first, so a callback can only ever be returned once.
//! - Loading toasts never time out; callers dismiss or replace them.

use crate::core::config::TOAST_TIMEOUT_MS;

/// Maximum number of toasts kept on screen.
pub const MAX_VISIBLE: usize = 6;

/// Identifier handed back by [`ToastQueue::notify`] and [`ToastQueue::confirm`].
pub type ToastId = u64;

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Operation in flight; sticky until dismissed.
    Loading,
}

impl ToastKind {
    /// CSS modifier used by the toast host.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Loading => "loading",
        }
    }
}

/// Pending confirmation actions.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmActions<A> {
    /// Fired when the user confirms.
    pub on_confirm: A,
    /// Fired when the prompt is dismissed without confirming.
    pub on_cancel: Option<A>,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast<A> {
    /// Queue-unique id.
    pub id: ToastId,
    /// Text shown to the user.
    pub message: String,
    /// Flavour.
    pub kind: ToastKind,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    pub timeout_ms: Option<u32>,
    /// Present for confirm prompts.
    pub confirm: Option<ConfirmActions<A>>,
}

impl<A> Toast<A> {
    /// Whether this toast is a confirm prompt.
    #[must_use]
    pub const fn is_confirm(&self) -> bool {
        self.confirm.is_some()
    }
}

/// Insertion-ordered toast queue.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue<A> {
    next_id: ToastId,
    toasts: Vec<Toast<A>>,
}

impl<A> Default for ToastQueue<A> {
    fn default() -> Self {
        Self {
            next_id: 1,
            toasts: Vec::new(),
        }
    }
}

impl<A> ToastQueue<A> {
    /// Visible toasts in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast<A>] {
        &self.toasts
    }

    /// Find a toast by id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast<A>> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    /// Push a notification. `timeout_ms` falls back to the default delay and
    /// is ignored for loading toasts.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        timeout_ms: Option<u32>,
    ) -> ToastId {
        let timeout_ms = match kind {
            ToastKind::Loading => None,
            _ => Some(timeout_ms.unwrap_or(TOAST_TIMEOUT_MS)),
        };
        self.push(message.into(), kind, timeout_ms, None)
    }

    /// Push a confirm prompt. It never times out.
    pub fn confirm(&mut self, message: impl Into<String>, on_confirm: A, on_cancel: Option<A>) -> ToastId {
        self.push(
            message.into(),
            ToastKind::Info,
            None,
            Some(ConfirmActions {
                on_confirm,
                on_cancel,
            }),
        )
    }

    /// Remove a toast. For confirm prompts, returns the cancel action to fire.
    pub fn dismiss(&mut self, id: ToastId) -> Option<A> {
        self.take(id)
            .and_then(|toast| toast.confirm)
            .and_then(|actions| actions.on_cancel)
    }

    /// Confirm a prompt: removes it and returns the confirm action.
    pub fn accept(&mut self, id: ToastId) -> Option<A> {
        self.take(id)
            .and_then(|toast| toast.confirm)
            .map(|actions| actions.on_confirm)
    }

    /// Replace a toast's content in place, typically a loading toast with its
    /// outcome. Returns `false` when the toast is already gone.
    pub fn replace(&mut self, id: ToastId, message: impl Into<String>, kind: ToastKind) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) else {
            return false;
        };
        toast.message = message.into();
        toast.kind = kind;
        toast.timeout_ms = match kind {
            ToastKind::Loading => None,
            _ => Some(TOAST_TIMEOUT_MS),
        };
        true
    }

    fn push(
        &mut self,
        message: String,
        kind: ToastKind,
        timeout_ms: Option<u32>,
        confirm: Option<ConfirmActions<A>>,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            kind,
            timeout_ms,
            confirm,
        });
        while self.toasts.len() > MAX_VISIBLE {
            let Some(index) = self.toasts.iter().position(|toast| !toast.is_confirm()) else {
                break;
            };
            self.toasts.remove(index);
        }
        id
    }

    fn take(&mut self, id: ToastId) -> Option<Toast<A>> {
        let index = self.toasts.iter().position(|toast| toast.id == id)?;
        Some(self.toasts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Action {
        Delete,
        Keep,
    }

    #[test]
    fn notify_applies_default_timeout_except_loading() {
        let mut queue = ToastQueue::<Action>::default();
        let saved = queue.notify("Saved", ToastKind::Success, None);
        let custom = queue.notify("Slow", ToastKind::Info, Some(5_000));
        let loading = queue.notify("Loading...", ToastKind::Loading, Some(5_000));
        assert_eq!(queue.get(saved).and_then(|t| t.timeout_ms), Some(2_000));
        assert_eq!(queue.get(custom).and_then(|t| t.timeout_ms), Some(5_000));
        assert_eq!(queue.get(loading).and_then(|t| t.timeout_ms), None);
        assert!(saved < custom && custom < loading);
    }

    #[test]
    fn accept_fires_confirm_once_and_never_cancel() {
        let mut queue = ToastQueue::default();
        let id = queue.confirm("Delete spray?", Action::Delete, Some(Action::Keep));
        assert_eq!(queue.accept(id), Some(Action::Delete));
        assert_eq!(queue.accept(id), None);
        assert_eq!(queue.dismiss(id), None);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn dismiss_fires_cancel_once_and_never_confirm() {
        let mut queue = ToastQueue::default();
        let id = queue.confirm("Delete model?", Action::Delete, Some(Action::Keep));
        assert_eq!(queue.dismiss(id), Some(Action::Keep));
        assert_eq!(queue.dismiss(id), None);
        assert_eq!(queue.accept(id), None);
    }

    #[test]
    fn dismiss_without_cancel_action_is_silent() {
        let mut queue = ToastQueue::default();
        let id = queue.confirm("Proceed?", Action::Delete, None);
        assert_eq!(queue.dismiss(id), None);
        assert!(queue.get(id).is_none());
    }

    #[test]
    fn replace_turns_loading_into_outcome() {
        let mut queue = ToastQueue::<Action>::default();
        let id = queue.notify("Creating spray...", ToastKind::Loading, None);
        assert!(queue.replace(id, "Spray created", ToastKind::Success));
        let toast = queue.get(id).cloned();
        assert_eq!(toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));
        assert_eq!(toast.and_then(|t| t.timeout_ms), Some(2_000));
        assert!(!queue.replace(99, "gone", ToastKind::Error));
    }

    #[test]
    fn overflow_drops_oldest_plain_toast_and_keeps_prompts() {
        let mut queue = ToastQueue::default();
        let prompt = queue.confirm("Sure?", Action::Delete, None);
        for index in 0..MAX_VISIBLE {
            queue.notify(format!("note {index}"), ToastKind::Info, None);
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert!(queue.get(prompt).is_some());
        assert_eq!(queue.toasts()[1].message, "note 1");
    }
}
