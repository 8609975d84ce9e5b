//! Search helpers: list filtering and the header quick-search.

/// Case-insensitive substring match. An empty (or blank) term matches everything.
#[must_use]
pub fn matches_term(text: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

/// Where a quick-search target leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDestination {
    /// Client-side route path.
    Path(&'static str),
    /// Open the notification dropdown.
    Notifications,
}

/// Entry offered by the header search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTarget {
    /// Stable key.
    pub id: &'static str,
    /// Label matched against the query.
    pub label: &'static str,
    /// Secondary line.
    pub description: &'static str,
    /// Action on selection.
    pub destination: SearchDestination,
}

const fn link(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    path: &'static str,
) -> SearchTarget {
    SearchTarget {
        id,
        label,
        description,
        destination: SearchDestination::Path(path),
    }
}

/// Every quick-search target, in display order.
pub const SEARCH_TARGETS: [SearchTarget; 8] = [
    link("dashboard", "Dashboard", "Go to your main dashboard", "/"),
    link("model", "Model", "Manage your AI/ML models", "/model"),
    link("plants", "Plants", "View and manage plant data", "/plants"),
    link("diseases", "Diseases", "Track and analyze plant diseases", "/diseases"),
    link("accounts", "Accounts", "Manage user accounts", "/accounts"),
    link("feedback", "Feedback", "View user feedback", "/feedback"),
    link("settings", "Settings", "Go to system settings page", "/settings"),
    SearchTarget {
        id: "notifications",
        label: "Notifications",
        description: "Check your recent alerts",
        destination: SearchDestination::Notifications,
    },
];

/// Targets whose label contains `query`. A blank query yields nothing.
#[must_use]
pub fn search_targets(query: &str) -> Vec<SearchTarget> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    SEARCH_TARGETS
        .iter()
        .copied()
        .filter(|target| matches_term(target.label, query))
        .collect()
}

/// Arrow-key movement through a result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `ArrowUp`
    Up,
    /// `ArrowDown`
    Down,
}

/// Move the highlighted index with wrap-around; `0` for an empty list.
#[must_use]
pub const fn cycle_highlight(current: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Down => (current + 1) % len,
        Direction::Up => (current + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_term_ignores_case_and_blank_terms() {
        assert!(matches_term("Copper Fungicide", "copper"));
        assert!(matches_term("anything", "  "));
        assert!(!matches_term("Neem oil", "sulfur"));
    }

    #[test]
    fn search_targets_filter_by_label() {
        let ids: Vec<_> = search_targets("se").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["diseases", "settings"]);
        assert!(search_targets("").is_empty());
        assert_eq!(
            search_targets("NOTIF")[0].destination,
            SearchDestination::Notifications
        );
    }

    #[test]
    fn highlight_wraps_both_ways() {
        assert_eq!(cycle_highlight(2, 3, Direction::Down), 0);
        assert_eq!(cycle_highlight(0, 3, Direction::Up), 2);
        assert_eq!(cycle_highlight(1, 3, Direction::Up), 0);
        assert_eq!(cycle_highlight(4, 0, Direction::Down), 0);
    }
}
