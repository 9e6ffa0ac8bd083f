//! View rendering for the combo-box.
//!
//! The trigger is always drawn. The item menu is drawn below it only while
//! the menu is visible.

use super::disclosure::InteractionStatus;
use super::style::SELECTED_MARKER;
use super::Model;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";

impl Model {
    pub(super) fn view_trigger(&self) -> String {
        if self.interaction_status() == InteractionStatus::Disabled {
            let text = if self.state.typed_text.is_empty() {
                self.options.placeholder_text()
            } else {
                self.state.typed_text.as_str()
            };
            return self.styles.disabled.clone().render(&format!("{PROMPT}{text}"));
        }

        let prompt = self.styles.prompt.clone().render(PROMPT);
        let body = if self.state.typed_text.is_empty() {
            self.styles
                .placeholder
                .clone()
                .render(self.options.placeholder_text())
        } else {
            self.styles.text.clone().render(&self.state.typed_text)
        };
        format!("{prompt}{body}")
    }

    pub(super) fn view_menu(&self) -> String {
        let shown = self.shown_items();
        if shown.is_empty() {
            return self.styles.no_matches.clone().render("No matches");
        }

        let width = shown
            .iter()
            .map(|item| self.display_name(item).width())
            .max()
            .unwrap_or(0);
        let highlight = self.highlight_index();
        let selected_id = self.selected_item().map(|item| item.id.as_str());

        shown
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let name = self.display_name(item);
                let is_selected = selected_id == Some(item.id.as_str());
                let marker = if is_selected { SELECTED_MARKER } else { " " };
                let padding = " ".repeat(width.saturating_sub(name.width()));
                let line = format!("{marker} {name}{padding}");

                let style = if highlight == Some(index) {
                    &self.styles.highlighted_item
                } else if is_selected {
                    &self.styles.selected_item
                } else {
                    &self.styles.item
                };
                style.clone().render(&line)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
