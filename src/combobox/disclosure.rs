//! Disclosure adapter: bridges menu visibility to the hosting popup.
//!
//! The host owns positioning and click-outside detection. It reads
//! [`Model::menu_status`] and [`Model::interaction_status`] to decide what to
//! draw, and reports pointer events back through [`Model::click_away`] and
//! [`Model::toggle_menu`].

use super::Model;
use tracing::debug;

/// Whether the candidate list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    /// The list is shown.
    Open,
    /// The list is hidden.
    Closed,
}

/// Whether the trigger accepts interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStatus {
    /// The trigger can open the list.
    Default,
    /// The store is empty; the field is visible but cannot be opened.
    Disabled,
}

impl Model {
    /// Current menu status.
    pub fn menu_status(&self) -> MenuStatus {
        if self.state.menu_visible {
            MenuStatus::Open
        } else {
            MenuStatus::Closed
        }
    }

    /// Disabled when there are no candidates at all.
    pub fn interaction_status(&self) -> InteractionStatus {
        if self.store.is_empty() {
            InteractionStatus::Disabled
        } else {
            InteractionStatus::Default
        }
    }

    /// Cancels editing: restores the last committed text and closes the menu.
    ///
    /// The selection is left untouched and the owner is not notified.
    pub fn click_away(&mut self) {
        debug!(backup = %self.state.backup_text, "click away, reverting text");
        self.revert_to_backup();
        self.close_menu();
    }

    /// Trigger-button click. Does nothing while disabled.
    pub fn toggle_menu(&mut self) {
        if self.interaction_status() == InteractionStatus::Disabled {
            return;
        }
        let open = !self.state.menu_visible;
        self.state = std::mem::take(&mut self.state).with_menu(open);
    }

    pub(super) fn close_menu(&mut self) {
        self.state = std::mem::take(&mut self.state).with_menu(false);
    }
}
