//! Filter engine: derives the shown items from the typed text.
//!
//! Matching is a case-insensitive substring test against each item's display
//! name. The result is always a subsequence of the store order, and every
//! recomputation drops the keyboard highlight because the visible positions
//! may have shifted.

use super::store::CandidateStore;
use super::types::item_display_name;
use super::Model;
use tracing::trace;

/// Store positions of the items whose display name contains `needle`,
/// ignoring case. An empty needle matches everything.
pub fn matching_positions(store: &CandidateStore, needle: &str, fallback: &str) -> Vec<usize> {
    if needle.is_empty() {
        return (0..store.len()).collect();
    }
    let needle = needle.to_lowercase();
    store
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            item_display_name(item, fallback)
                .to_lowercase()
                .contains(&needle)
        })
        .map(|(position, _)| position)
        .collect()
}

impl Model {
    /// Recomputes the shown items for `needle` and makes it the typed text.
    ///
    /// A non-empty needle opens the menu unless the store is empty, which
    /// keeps the widget disabled. An empty needle shows every candidate and
    /// leaves the menu as it was. Either way the highlight is reset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbletea_combobox::combobox::{ComboBoxOptions, Item, Model};
    /// let mut combo = Model::new(
    ///     vec![Item::new("1", "Apple"), Item::new("2", "Banana")],
    ///     ComboBoxOptions::default(),
    /// )
    /// .unwrap();
    ///
    /// combo.filter("AN");
    /// assert_eq!(combo.shown_len(), 1);
    /// assert!(combo.menu_visible());
    ///
    /// combo.filter("");
    /// assert_eq!(combo.shown_len(), 2);
    /// assert_eq!(combo.typed_text(), "");
    /// ```
    pub fn filter(&mut self, needle: &str) {
        let shown = matching_positions(&self.store, needle, self.options.default_name_text());
        trace!(needle, shown = shown.len(), "filtered candidates");
        let open = !needle.is_empty() && !self.store.is_empty();
        self.state = std::mem::take(&mut self.state).filtered(needle, shown, open);
    }

    /// Text-field change notification carrying the raw field value.
    pub fn on_text_changed(&mut self, value: &str) {
        self.filter(value);
    }
}
