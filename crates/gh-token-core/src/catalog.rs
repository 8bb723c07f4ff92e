//! Selectable view of database entries keyed by display title.

use crate::models::Entry;
use std::collections::HashMap;

/// Group name prefix whose entries are never offered.
pub const RECYCLE_BIN_PREFIX: &str = "Recycle Bin";

/// Short title used for selection: everything before the first `" ("`.
///
/// `"Personal (work laptop)"` becomes `"Personal"`; titles without the
/// marker are returned unchanged.
pub fn display_title(title: &str) -> &str {
    match title.find(" (") {
        Some(pos) => &title[..pos],
        None => title,
    }
}

/// Entries indexed by display title.
///
/// Two entries that share a display title collide and the one enumerated
/// later replaces the earlier one. The title keeps the position where it was
/// first seen.
#[derive(Debug, Default)]
pub struct Catalog {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// Build the catalog, skipping anything filed under the recycle bin.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if entry.group.starts_with(RECYCLE_BIN_PREFIX) {
                tracing::trace!("Skipping recycled entry {:?}", entry.title);
                continue;
            }
            catalog.insert(entry);
        }
        catalog
    }

    fn insert(&mut self, entry: Entry) {
        let title = display_title(&entry.title).to_string();
        if let Some(previous) = self.entries.insert(title.clone(), entry) {
            tracing::debug!("{:?} replaced an earlier entry ({:?})", title, previous.title);
        } else {
            self.order.push(title);
        }
    }

    /// Display titles sorted case-insensitively, descending.
    ///
    /// Titles that compare equal ignoring case keep their insertion order.
    pub fn candidates(&self) -> Vec<String> {
        let mut titles = self.order.clone();
        titles.sort_by_cached_key(|t| std::cmp::Reverse(t.to_lowercase()));
        titles
    }

    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.get(title)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, group: &str, password: &str) -> Entry {
        Entry::new(title, group, password)
    }

    #[test]
    fn display_title_truncates_at_parenthetical() {
        assert_eq!(display_title("Personal (work laptop)"), "Personal");
        assert_eq!(display_title("Personal"), "Personal");
        assert_eq!(display_title("a (b) (c)"), "a");
        // Only the space-paren pair counts.
        assert_eq!(display_title("ci(nightly)"), "ci(nightly)");
        assert_eq!(display_title(" (leading)"), "");
    }

    #[test]
    fn later_entry_wins_on_collision() {
        let catalog = Catalog::from_entries([
            entry("X (2024)", "GitHub", "old"),
            entry("X (2025)", "GitHub", "new"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("X").map(|e| e.password.as_str()), Some("new"));
    }

    #[test]
    fn recycle_bin_entries_are_skipped() {
        let catalog = Catalog::from_entries([
            entry("kept", "GitHub", "a"),
            entry("gone", "Recycle Bin", "b"),
            entry("also gone", "Recycle Bin (old)", "c"),
        ]);
        assert_eq!(catalog.candidates(), vec!["kept".to_string()]);
        assert!(catalog.get("gone").is_none());
    }

    #[test]
    fn recycled_entry_does_not_shadow_live_one() {
        let catalog = Catalog::from_entries([
            entry("X", "GitHub", "live"),
            entry("X", "Recycle Bin", "dead"),
        ]);
        assert_eq!(catalog.get("X").map(|e| e.password.as_str()), Some("live"));
    }

    #[test]
    fn candidates_sort_case_insensitively_descending() {
        let catalog = Catalog::from_entries([
            entry("alpha", "g", "1"),
            entry("Beta", "g", "2"),
            entry("gamma", "g", "3"),
        ]);
        assert_eq!(catalog.candidates(), vec!["gamma", "Beta", "alpha"]);
    }

    #[test]
    fn case_only_differences_keep_insertion_order() {
        let catalog = Catalog::from_entries([
            entry("Token", "g", "1"),
            entry("token", "g", "2"),
            entry("zed", "g", "3"),
        ]);
        assert_eq!(catalog.candidates(), vec!["zed", "Token", "token"]);
    }

    #[test]
    fn empty_database_yields_empty_catalog() {
        let catalog = Catalog::from_entries(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.candidates().is_empty());
    }
}
