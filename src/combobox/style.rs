//! Styles for the combo-box trigger and menu.

use lipgloss_extras::prelude::*;

/// Marker drawn before the committed item in the menu.
pub const SELECTED_MARKER: &str = "✓";

/// Styling for each visual element of the combo-box.
#[derive(Debug, Clone)]
pub struct ComboBoxStyles {
    /// Prompt drawn before the text field.
    pub prompt: Style,
    /// Typed text.
    pub text: Style,
    /// Placeholder shown while the field is empty.
    pub placeholder: Style,
    /// Trigger when the store is empty.
    pub disabled: Style,
    /// Menu item in its normal state.
    pub item: Style,
    /// Menu item under the keyboard highlight.
    pub highlighted_item: Style,
    /// Menu item that is the committed selection.
    pub selected_item: Style,
    /// Shown when no item matches the typed text.
    pub no_matches: Style,
}

impl Default for ComboBoxStyles {
    fn default() -> Self {
        let item = Style::new()
            .foreground(Color::from("#dddddd"))
            .padding(0, 0, 0, 2);
        Self {
            prompt: Style::new().foreground(Color::from("#AD58B4")),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            disabled: Style::new().faint(true),
            highlighted_item: Style::new()
                .foreground(Color::from("#EE6FF8"))
                .reverse(true)
                .padding(0, 0, 0, 2),
            selected_item: item.clone().foreground(Color::from("#04b575")).bold(true),
            item,
            no_matches: Style::new().foreground(Color::from("#777777")).padding(0, 0, 0, 2),
        }
    }
}
