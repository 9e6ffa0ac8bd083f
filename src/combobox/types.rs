//! Core types for the combo-box component.
//!
//! This module contains the selectable [`Item`], the display-name rules
//! shared by filtering, validation and rendering, the derived
//! [`SelectionState`], and the messages the component accepts in `update`.

use bubbletea_rs::Msg;

/// A selectable candidate with a stable identifier and optional display name.
///
/// # Examples
///
/// ```
/// use bubbletea_combobox::combobox::Item;
///
/// let apple = Item::new("1", "Apple");
/// assert_eq!(apple.id, "1");
/// assert_eq!(apple.name.as_deref(), Some("Apple"));
///
/// let unnamed = Item::unnamed("2");
/// assert!(unnamed.name.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier, unique within a candidate store.
    pub id: String,
    /// Optional display name. Blank names fall back to the configured default.
    pub name: Option<String>,
}

impl Item {
    /// Creates a named item.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Creates an item without a display name.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// Reports whether `s` is absent, empty, or only whitespace.
pub(crate) fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

/// Returns `val` unless it is blank, in which case `backup` is returned.
pub(crate) fn value_with_backup<'a>(val: Option<&'a str>, backup: &'a str) -> &'a str {
    match val {
        Some(v) if !is_blank(Some(v)) => v,
        _ => backup,
    }
}

/// The name shown for `item`, substituting `fallback` for a blank name.
pub(crate) fn item_display_name<'a>(item: &'a Item, fallback: &'a str) -> &'a str {
    value_with_backup(item.name.as_deref(), fallback)
}

/// The text committed for a selection.
///
/// An item with an empty id commits as empty text, as does no selection.
pub(crate) fn committed_text(item: Option<&Item>, fallback: &str) -> String {
    match item {
        Some(item) if !item.id.is_empty() => item_display_name(item, fallback).to_string(),
        _ => String::new(),
    }
}

/// Interaction state derived from the widget's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Menu closed, nothing highlighted.
    Idle,
    /// Menu open, user has typed but not navigated.
    Browsing,
    /// Menu open with a keyboard highlight.
    Highlighted,
}

/// Callback notified with every committed selection, including `None`.
pub type OnSelectFunc = Box<dyn FnMut(Option<&Item>) + Send>;

/// Sent by the host when a pointer press lands outside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickAwayMsg;

/// Sent by the host when the item at this position in the shown list is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemClickMsg(pub usize);

/// Sent by the host when the trigger button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMenuMsg;

/// Sent by the host when the text field's clear affordance is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearMsg;

impl From<ClickAwayMsg> for Msg {
    fn from(msg: ClickAwayMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ItemClickMsg> for Msg {
    fn from(msg: ItemClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ToggleMenuMsg> for Msg {
    fn from(msg: ToggleMenuMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ClearMsg> for Msg {
    fn from(msg: ClearMsg) -> Self {
        Box::new(msg) as Msg
    }
}
