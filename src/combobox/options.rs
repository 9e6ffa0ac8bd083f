//! Construction options for the combo-box.
//!
//! Options are plain data with builder-style setters. Blank strings resolve
//! to the documented defaults when read, so hosts may pass through whatever
//! their own configuration holds.

use super::types::{value_with_backup, Item};

/// Default text shown while the field is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Select a Value";
/// Default widget name used to derive test hooks.
pub const DEFAULT_NAME: &str = "header";
/// Default test hook of the trigger button.
pub const DEFAULT_BUTTON_TEST_ID: &str = "type-ahead-dropdown--button";
/// Default test hook of the item menu.
pub const DEFAULT_MENU_TEST_ID: &str = "type-ahead-dropdown--menu";
/// Default prefix of per-item test hooks.
pub const DEFAULT_ITEM_TEST_ID_PREFIX: &str = "type-ahead-dropdown--item";

/// Options accepted by [`Model::new`](super::Model::new).
///
/// # Examples
///
/// ```
/// use bubbletea_combobox::combobox::{ComboBoxOptions, Item};
///
/// let opts = ComboBoxOptions::default()
///     .with_sort_names(true)
///     .with_placeholder_text("Pick a fruit")
///     .with_selected_option(Item::new("2", "Banana"));
///
/// assert_eq!(opts.placeholder_text(), "Pick a fruit");
/// assert_eq!(opts.button_test_id(), "type-ahead-dropdown--button");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComboBoxOptions {
    pub(super) selected_option: Option<Item>,
    pub(super) sort_names: bool,
    pub(super) placeholder_text: Option<String>,
    pub(super) default_name_text: Option<String>,
    pub(super) disable_auto_focus: bool,
    pub(super) name: Option<String>,
    pub(super) test_id: Option<String>,
    pub(super) button_test_id: Option<String>,
    pub(super) menu_test_id: Option<String>,
    pub(super) item_test_id_prefix: Option<String>,
}

impl ComboBoxOptions {
    /// Seeds the widget with an initial selection.
    pub fn with_selected_option(mut self, item: Item) -> Self {
        self.selected_option = Some(item);
        self
    }

    /// Sorts the candidates by display name at construction.
    pub fn with_sort_names(mut self, sort: bool) -> Self {
        self.sort_names = sort;
        self
    }

    /// Text shown while the field is empty.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }

    /// Display name used for items whose own name is blank.
    pub fn with_default_name_text(mut self, text: impl Into<String>) -> Self {
        self.default_name_text = Some(text.into());
        self
    }

    /// Leaves the widget unfocused after construction.
    pub fn with_disable_auto_focus(mut self, disable: bool) -> Self {
        self.disable_auto_focus = disable;
        self
    }

    /// Name used to derive the input and container test hooks.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Test hook of the whole widget.
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Test hook of the trigger button.
    pub fn with_button_test_id(mut self, id: impl Into<String>) -> Self {
        self.button_test_id = Some(id.into());
        self
    }

    /// Test hook of the item menu.
    pub fn with_menu_test_id(mut self, id: impl Into<String>) -> Self {
        self.menu_test_id = Some(id.into());
        self
    }

    /// Prefix of per-item test hooks.
    pub fn with_item_test_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.item_test_id_prefix = Some(prefix.into());
        self
    }

    /// Resolved placeholder text.
    pub fn placeholder_text(&self) -> &str {
        value_with_backup(self.placeholder_text.as_deref(), DEFAULT_PLACEHOLDER)
    }

    /// Resolved fallback display name.
    pub fn default_name_text(&self) -> &str {
        value_with_backup(self.default_name_text.as_deref(), "")
    }

    /// Resolved widget name.
    pub fn name(&self) -> &str {
        value_with_backup(self.name.as_deref(), DEFAULT_NAME)
    }

    /// Resolved widget test hook.
    pub fn test_id(&self) -> String {
        match self.test_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("typeAhead-dropdown--{}", self.name()),
        }
    }

    /// Test hook of the text field.
    pub fn input_test_id(&self) -> String {
        format!("dropdown-input-typeAhead--{}", self.name())
    }

    /// Resolved trigger button test hook.
    pub fn button_test_id(&self) -> &str {
        value_with_backup(self.button_test_id.as_deref(), DEFAULT_BUTTON_TEST_ID)
    }

    /// Resolved menu test hook.
    pub fn menu_test_id(&self) -> &str {
        value_with_backup(self.menu_test_id.as_deref(), DEFAULT_MENU_TEST_ID)
    }

    /// Test hook of the item with this id.
    pub fn item_test_id(&self, id: &str) -> String {
        let prefix = value_with_backup(
            self.item_test_id_prefix.as_deref(),
            DEFAULT_ITEM_TEST_ID_PREFIX,
        );
        format!("{prefix}-{id}")
    }

    /// Whether the widget takes focus at construction.
    pub fn auto_focus(&self) -> bool {
        !self.disable_auto_focus
    }
}
