//! Sidebar entries and page titles.

/// Sidebar entries: `(name, path)`.
pub const NAV_ITEMS: [(&str, &str); 9] = [
    ("Dashboard", "/"),
    ("Model", "/model"),
    ("Plants", "/plants"),
    ("Diseases", "/diseases"),
    ("Sprays", "/sprays"),
    ("Logs", "/logs"),
    ("Accounts", "/accounts"),
    ("Feedback", "/feedback"),
    ("Settings", "/settings"),
];

/// Header title for `path`; `Unknown` for paths outside the sidebar.
#[must_use]
pub fn page_title(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|(_, item)| *item == path)
        .map_or("Unknown", |(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_sidebar() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/logs"), "Logs");
        assert_eq!(page_title("/nope"), "Unknown");
    }
}
