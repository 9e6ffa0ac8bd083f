//! Key bindings and the keyboard navigator.
//!
//! Raw key messages are translated once into a [`NavKey`]; the state machine
//! only ever sees that closed set of actions.
//!
//! ## Default Keys
//!
//! - **Highlight**: `↑/ctrl+p` (up), `↓/ctrl+n` (down)
//! - **Confirm**: `enter`
//! - **Cancel**: `esc` (same as clicking away)
//! - **Clear**: `ctrl+u`

use super::Model;
use crate::key::{self, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::trace;

/// The keyboard actions the navigator handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move the highlight one item up.
    MoveUp,
    /// Move the highlight one item down.
    MoveDown,
    /// Commit the highlighted item or validate the typed text.
    Confirm,
}

/// Key bindings for the combo-box.
#[derive(Debug, Clone)]
pub struct ComboKeyMap {
    /// Move the highlight up.
    pub move_up: Binding,
    /// Move the highlight down.
    pub move_down: Binding,
    /// Confirm the highlight or typed text.
    pub confirm: Binding,
    /// Revert the typed text and close the menu.
    pub cancel: Binding,
    /// Clear the selection.
    pub clear: Binding,
}

impl Default for ComboKeyMap {
    fn default() -> Self {
        Self {
            move_up: Binding::new(vec![
                KeyCode::Up.into(),
                (KeyCode::Char('p'), KeyModifiers::CONTROL).into(),
            ])
            .with_help("↑/ctrl+p", "up"),
            move_down: Binding::new(vec![
                KeyCode::Down.into(),
                (KeyCode::Char('n'), KeyModifiers::CONTROL).into(),
            ])
            .with_help("↓/ctrl+n", "down"),
            confirm: Binding::new(vec![KeyCode::Enter.into()]).with_help("enter", "select"),
            cancel: Binding::new(vec![KeyCode::Esc.into()]).with_help("esc", "cancel"),
            clear: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL).into()])
                .with_help("ctrl+u", "clear"),
        }
    }
}

impl ComboKeyMap {
    /// Translates a key message into a navigator action.
    ///
    /// Movement is checked before confirmation, so one message maps to at
    /// most one action.
    pub fn nav_key(&self, key_msg: &KeyMsg) -> Option<NavKey> {
        if self.move_down.matches(key_msg) {
            Some(NavKey::MoveDown)
        } else if self.move_up.matches(key_msg) {
            Some(NavKey::MoveUp)
        } else if self.confirm.matches(key_msg) {
            Some(NavKey::Confirm)
        } else {
            None
        }
    }
}

impl key::KeyMap for ComboKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.move_up, &self.move_down, &self.confirm]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.move_up, &self.move_down],
            vec![&self.confirm, &self.cancel, &self.clear],
        ]
    }
}

impl Model {
    /// Applies one navigator action.
    pub fn navigate(&mut self, nav: NavKey) {
        match nav {
            NavKey::MoveDown => self.move_down(),
            NavKey::MoveUp => self.move_up(),
            NavKey::Confirm => self.confirm(),
        }
    }

    /// Moves the highlight down one item. Stops at the last item.
    pub fn move_down(&mut self) {
        let next = self.highlight_index().map_or(0, |i| i + 1);
        if next < self.state.shown.len() {
            trace!(highlight = next, "highlight moved");
            self.state = std::mem::take(&mut self.state).highlighted(Some(next));
        }
    }

    /// Moves the highlight up one item. From the first item the highlight is
    /// removed; without a highlight this does nothing.
    pub fn move_up(&mut self) {
        if let Some(current) = self.highlight_index() {
            let next = current.checked_sub(1);
            trace!(highlight = ?next, "highlight moved");
            self.state = std::mem::take(&mut self.state).highlighted(next);
        }
    }

    /// Commits the highlighted item, or validates the typed text when
    /// nothing is highlighted.
    pub fn confirm(&mut self) {
        match self.highlight_index() {
            Some(index) => self.select_shown(index),
            None => self.validate_typed_text(),
        }
    }
}
