//! Header notification list helpers.
//!
//! # Design
//! - Marking a notification read updates the local list immediately; the
//!   server call is fire-and-forget.
//! - The list is fetched for the cached profile id and skipped without one.

use agribot_api_models::{EntityId, Notification};

/// Notifications per dropdown page.
pub const PAGE_SIZE: usize = 3;
/// Characters of the message shown in the dropdown.
pub const PREVIEW_CHARS: usize = 50;

/// `GET` path listing a user's notifications.
#[must_use]
pub fn list_path(user_id: EntityId) -> String {
    format!("notification/user/{user_id}")
}

/// `PUT` path marking one notification read.
#[must_use]
pub fn mark_read_path(id: EntityId) -> String {
    format!("notification/mark-read/{id}")
}

/// Newest first; undated entries sink to the end.
pub fn sort_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Unread count for the bell badge.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Mark `id` read locally. Returns `true` when it was unread, meaning the
/// server should be told.
pub fn mark_read(notifications: &mut [Notification], id: EntityId) -> bool {
    notifications
        .iter_mut()
        .find(|n| n.id == id && !n.is_read)
        .is_some_and(|n| {
            n.is_read = true;
            true
        })
}

/// Message shortened to [`PREVIEW_CHARS`] characters with an ellipsis.
#[must_use]
pub fn preview(message: &str) -> String {
    if message.chars().count() > PREVIEW_CHARS {
        let head: String = message.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: EntityId, read: bool, day: Option<u32>) -> Notification {
        Notification {
            id,
            title: format!("n{id}"),
            is_read: read,
            created_at: day.and_then(|d| Utc.with_ymd_and_hms(2025, 5, d, 0, 0, 0).single()),
            ..Notification::default()
        }
    }

    #[test]
    fn marking_read_is_local_and_idempotent() {
        let mut list = vec![note(1, false, Some(1)), note(2, true, Some(2))];
        assert_eq!(unread_count(&list), 1);
        assert!(mark_read(&mut list, 1));
        assert!(!mark_read(&mut list, 1));
        assert!(!mark_read(&mut list, 99));
        assert_eq!(unread_count(&list), 0);
    }

    #[test]
    fn sorting_and_previews() {
        let mut list = vec![note(1, false, Some(1)), note(2, false, None), note(3, false, Some(9))];
        sort_newest_first(&mut list);
        let ids: Vec<_> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(list_path(7), "notification/user/7");
        assert_eq!(mark_read_path(3), "notification/mark-read/3");
    }
}
