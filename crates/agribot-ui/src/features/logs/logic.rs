//! Log list filtering.

use std::collections::BTreeSet;

use agribot_api_models::LogEntry;

use crate::core::search::matches_term;

/// Log rows per page.
pub const PAGE_SIZE: usize = 10;

/// Keep entries whose message contains `term` and, when `level` is set,
/// whose level matches it (case-insensitive).
#[must_use]
pub fn filter_logs(logs: &[LogEntry], term: &str, level: Option<&str>) -> Vec<LogEntry> {
    logs.iter()
        .filter(|log| matches_term(&log.message, term))
        .filter(|log| level.is_none_or(|level| log.level.eq_ignore_ascii_case(level)))
        .cloned()
        .collect()
}

/// Distinct levels present in `logs`, lower-cased and sorted.
#[must_use]
pub fn levels(logs: &[LogEntry]) -> Vec<String> {
    logs.iter()
        .map(|log| log.level.trim().to_lowercase())
        .filter(|level| !level.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Badge modifier for a level.
#[must_use]
pub fn level_class(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "error" | "fatal" => "badge-error",
        "warn" | "warning" => "badge-warning",
        "debug" | "trace" => "badge-ghost",
        _ => "badge-info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(id: i64, level: &str, message: &str) -> LogEntry {
        LogEntry {
            id,
            level: level.to_string(),
            message: message.to_string(),
            ..LogEntry::default()
        }
    }

    #[test]
    fn filters_by_message_and_level() {
        let logs = vec![
            log(1, "info", "Robot connected"),
            log(2, "error", "Robot disconnected"),
            log(3, "info", "Spray cycle done"),
        ];
        let ids: Vec<_> = filter_logs(&logs, "robot", None).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let ids: Vec<_> = filter_logs(&logs, "", Some("INFO")).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filter_logs(&logs, "robot", Some("warn")).is_empty());
    }

    #[test]
    fn levels_are_distinct_and_sorted() {
        let logs = vec![log(1, "Warn", ""), log(2, "error", ""), log(3, "warn", "")];
        assert_eq!(levels(&logs), vec!["error".to_string(), "warn".to_string()]);
        assert_eq!(level_class("ERROR"), "badge-error");
        assert_eq!(level_class("info"), "badge-info");
    }
}
