//! Selection tracking by record identity.

use std::collections::HashSet;

/// Selected record identities.
///
/// Selection is keyed by identity rather than position, so it survives
/// sorting, reordering and page changes. Records that disappear from the
/// collection simply stop matching; stale identities are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one identity; returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Toggle a whole page of identities.
    ///
    /// If any of the given identities is unselected, all of them become
    /// selected; only when every one is already selected are they all
    /// deselected. An empty page is a no-op.
    pub fn toggle_page(&mut self, page_ids: &[String]) {
        if page_ids.is_empty() {
            return;
        }
        if self.is_all_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            for id in page_ids {
                self.ids.insert(id.clone());
            }
        }
    }

    /// Replace the selection with the given identities.
    pub fn replace_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.ids = ids.into_iter().collect();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the identity is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether every given identity is selected. Empty input is not.
    pub fn is_all_selected(&self, ids: &[String]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.ids.contains(id))
    }

    /// Whether at least one given identity is selected.
    pub fn is_any_selected(&self, ids: &[String]) -> bool {
        ids.iter().any(|id| self.ids.contains(id))
    }

    /// Number of selected identities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the selected identities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
