//! Main Model struct and the selection state machine.
//!
//! All widget state lives in [`WidgetState`]. Every operation replaces the
//! whole state through one transition function, so fields that must change
//! together (text, shown items, highlight, selection, backup text, menu)
//! can never be left half-updated.

use super::keys::ComboKeyMap;
use super::options::ComboBoxOptions;
use super::store::{CandidateStore, Result};
use super::style::ComboBoxStyles;
use super::types::{
    committed_text, is_blank, item_display_name, Item, OnSelectFunc, SelectionState,
};
use tracing::{debug, warn};

/// The live state of one widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Current content of the text field.
    pub typed_text: String,
    /// Store positions of the items currently shown, in store order.
    pub shown: Vec<usize>,
    /// Keyboard highlight within `shown`.
    pub highlight: Option<usize>,
    /// Store position of the committed selection.
    pub selected: Option<usize>,
    /// Display text of the last commit; the only revert target.
    pub backup_text: String,
    /// Whether the candidate list is shown.
    pub menu_visible: bool,
}

impl WidgetState {
    pub(super) fn filtered(self, needle: &str, shown: Vec<usize>, open: bool) -> Self {
        Self {
            typed_text: needle.to_string(),
            shown,
            highlight: None,
            menu_visible: self.menu_visible || open,
            ..self
        }
    }

    pub(super) fn committed(self, selected: Option<usize>, text: String, close: bool) -> Self {
        Self {
            typed_text: text.clone(),
            backup_text: text,
            selected,
            highlight: None,
            menu_visible: self.menu_visible && !close,
            ..self
        }
    }

    pub(super) fn rejected(self, text: String) -> Self {
        Self {
            typed_text: text,
            highlight: None,
            menu_visible: false,
            ..self
        }
    }

    pub(super) fn reverted(self) -> Self {
        Self {
            typed_text: self.backup_text.clone(),
            ..self
        }
    }

    pub(super) fn highlighted(self, highlight: Option<usize>) -> Self {
        Self { highlight, ..self }
    }

    pub(super) fn with_menu(self, menu_visible: bool) -> Self {
        Self {
            menu_visible,
            ..self
        }
    }
}

/// A type-ahead select component.
///
/// # Examples
///
/// ```
/// use bubbletea_combobox::combobox::{ComboBoxOptions, Item, Model};
///
/// let mut combo = Model::new(
///     vec![Item::new("1", "Apple"), Item::new("2", "Banana")],
///     ComboBoxOptions::default(),
/// )
/// .unwrap();
///
/// combo.filter("an");
/// assert_eq!(combo.shown_items(), vec![&Item::new("2", "Banana")]);
///
/// combo.move_down();
/// combo.confirm();
/// assert_eq!(combo.selected_item().map(|i| i.id.as_str()), Some("2"));
/// assert_eq!(combo.typed_text(), "Banana");
/// assert!(!combo.menu_visible());
/// ```
pub struct Model {
    pub(super) store: CandidateStore,
    pub(super) options: ComboBoxOptions,
    pub(super) state: WidgetState,
    pub(super) on_select: Option<OnSelectFunc>,
    pub(super) focus: bool,
    pub(super) keymap: ComboKeyMap,
    pub(super) styles: ComboBoxStyles,
}

impl Model {
    /// Creates a combo-box over `items`.
    ///
    /// Fails if an item id is empty or repeated.
    pub fn new(items: Vec<Item>, options: ComboBoxOptions) -> Result<Self> {
        let store = CandidateStore::new(items)?;
        Ok(Self::from_store(store, options))
    }

    /// Creates a combo-box over an already validated store.
    pub fn from_store(store: CandidateStore, options: ComboBoxOptions) -> Self {
        let store = if options.sort_names {
            store.sorted(options.default_name_text())
        } else {
            store
        };

        let selected = options.selected_option.as_ref().and_then(|item| {
            let position = store.items().iter().position(|c| c.id == item.id);
            if position.is_none() {
                warn!(id = %item.id, "initial selection is not in the candidate store");
            }
            position
        });
        let initial_text = committed_text(
            selected.map(|i| &store.items()[i]),
            options.default_name_text(),
        );

        let state = WidgetState {
            typed_text: initial_text.clone(),
            shown: (0..store.len()).collect(),
            highlight: None,
            selected,
            backup_text: initial_text,
            menu_visible: false,
        };

        Self {
            focus: options.auto_focus(),
            store,
            options,
            state,
            on_select: None,
            keymap: ComboKeyMap::default(),
            styles: ComboBoxStyles::default(),
        }
    }

    /// Registers the owner callback notified on every commit.
    pub fn with_on_select<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&Item>) + Send + 'static,
    {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Replaces the owner callback.
    pub fn set_on_select(&mut self, f: OnSelectFunc) {
        self.on_select = Some(f);
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: ComboKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ComboBoxStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Finalizes a selection and notifies the owner exactly once.
    ///
    /// This is the only operation that changes the committed selection.
    /// An item that is not in the candidate store commits as no selection.
    pub fn commit(&mut self, item: Option<&Item>, close_menu: bool) {
        let selected = item.and_then(|item| self.position_of(&item.id));
        self.commit_position(selected, close_menu);
    }

    pub(super) fn commit_position(&mut self, selected: Option<usize>, close_menu: bool) {
        let text = committed_text(
            selected.map(|i| &self.store.items()[i]),
            self.options.default_name_text(),
        );
        self.state = std::mem::take(&mut self.state).committed(selected, text, close_menu);

        let item = selected.map(|i| &self.store.items()[i]);
        debug!(id = item.map(|i| i.id.as_str()), close_menu, "committed selection");
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(item);
        }
    }

    /// Clears the selection and shows every candidate.
    pub fn clear(&mut self) {
        self.commit_position(None, false);
        self.filter("");
    }

    /// Restores the field text to the last committed display name.
    pub fn revert_to_backup(&mut self) {
        self.state = std::mem::take(&mut self.state).reverted();
    }

    /// Accepts the typed text if it names a candidate, otherwise falls back
    /// to the last committed selection.
    ///
    /// A match is a case-insensitive equality with some item's non-blank
    /// display name. A rejected text closes the menu without notifying the
    /// owner.
    pub fn validate_typed_text(&mut self) {
        let fallback = self.options.default_name_text();
        let typed = self.state.typed_text.to_lowercase();
        let found = self
            .store
            .items()
            .iter()
            .position(|item| {
                let name = item_display_name(item, fallback);
                !is_blank(Some(name)) && name.to_lowercase() == typed
            });

        match found {
            Some(position) => self.commit_position(Some(position), true),
            None => {
                debug!(typed = %self.state.typed_text, "rejected free text");
                let text = self.selected_display_name();
                self.state = std::mem::take(&mut self.state).rejected(text);
            }
        }
    }

    /// Commits the shown item at `index`, as a pointer click does.
    ///
    /// Out-of-range positions are ignored.
    pub fn select_shown(&mut self, index: usize) {
        if let Some(&position) = self.state.shown.get(index) {
            self.commit_position(Some(position), true);
        }
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.store.items().iter().position(|item| item.id == id)
    }

    pub(super) fn selected_display_name(&self) -> String {
        committed_text(self.selected_item(), self.options.default_name_text())
    }

    /// The display name of `item` under this widget's fallback text.
    pub fn display_name<'a>(&'a self, item: &'a Item) -> &'a str {
        item_display_name(item, self.options.default_name_text())
    }

    /// Current content of the text field.
    pub fn typed_text(&self) -> &str {
        &self.state.typed_text
    }

    /// The items currently shown, in store order.
    pub fn shown_items(&self) -> Vec<&Item> {
        self.state
            .shown
            .iter()
            .map(|&i| &self.store.items()[i])
            .collect()
    }

    /// Number of items currently shown.
    pub fn shown_len(&self) -> usize {
        self.state.shown.len()
    }

    /// The keyboard highlight, if it is valid for the shown items.
    pub fn highlight_index(&self) -> Option<usize> {
        self.state.highlight.filter(|&i| i < self.state.shown.len())
    }

    /// The highlighted item, if any.
    pub fn highlighted_item(&self) -> Option<&Item> {
        self.highlight_index()
            .map(|i| &self.store.items()[self.state.shown[i]])
    }

    /// The last committed selection.
    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected.map(|i| &self.store.items()[i])
    }

    /// Display text of the last commit.
    pub fn backup_text(&self) -> &str {
        &self.state.backup_text
    }

    /// Whether the candidate list is shown.
    pub fn menu_visible(&self) -> bool {
        self.state.menu_visible
    }

    /// A snapshot of the full widget state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// The candidate store.
    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    /// The construction options.
    pub fn options(&self) -> &ComboBoxOptions {
        &self.options
    }

    /// The key bindings.
    pub fn keymap(&self) -> &ComboKeyMap {
        &self.keymap
    }

    /// The interaction state derived from menu visibility and highlight.
    pub fn selection_state(&self) -> SelectionState {
        match (self.state.menu_visible, self.highlight_index()) {
            (false, _) => SelectionState::Idle,
            (true, None) => SelectionState::Browsing,
            (true, Some(_)) => SelectionState::Highlighted,
        }
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}
