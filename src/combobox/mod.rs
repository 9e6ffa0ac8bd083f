//! Type-ahead select (combo-box) component.
//!
//! A text field filters a candidate list as the user types. The filtered
//! results can be walked with the keyboard, and a selection is committed by
//! confirming the highlight, by typing a candidate's exact name, or by
//! clicking an item.
//!
//! ## State
//!
//! Four pieces of state move independently and are kept consistent by the
//! model:
//! - the **typed text**, which is free text until it is validated,
//! - the **shown items**, always a subsequence of the candidate store,
//! - the **highlight**, a keyboard cursor into the shown items,
//! - the **committed selection** and its display text, used to revert.
//!
//! Filtering always drops the highlight. Only a commit changes the selection
//! and notifies the owner. Clicking away restores the last committed text.
//!
//! ## Usage
//!
//! ```
//! use bubbletea_combobox::combobox::{ComboBoxOptions, Item, Model};
//! use std::sync::{Arc, Mutex};
//!
//! let picked = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&picked);
//!
//! let mut combo = Model::new(
//!     vec![Item::new("1", "Apple"), Item::new("2", "Banana")],
//!     ComboBoxOptions::default().with_sort_names(true),
//! )
//! .unwrap()
//! .with_on_select(move |item| {
//!     sink.lock().unwrap().push(item.map(|i| i.id.clone()));
//! });
//!
//! combo.filter("apple");
//! combo.confirm();
//! assert_eq!(*picked.lock().unwrap(), vec![Some("1".to_string())]);
//! ```

mod disclosure;
mod filtering;
mod keys;
mod model;
mod options;
mod rendering;
mod store;
mod style;
mod types;


pub use disclosure::{InteractionStatus, MenuStatus};
pub use filtering::matching_positions;
pub use keys::{ComboKeyMap, NavKey};
pub use model::{Model, WidgetState};
pub use options::{
    ComboBoxOptions, DEFAULT_BUTTON_TEST_ID, DEFAULT_ITEM_TEST_ID_PREFIX, DEFAULT_MENU_TEST_ID,
    DEFAULT_NAME, DEFAULT_PLACEHOLDER,
};
pub use store::{CandidateStore, Result, StoreError};
pub use style::{ComboBoxStyles, SELECTED_MARKER};
pub use types::{
    ClearMsg, ClickAwayMsg, Item, ItemClickMsg, OnSelectFunc, SelectionState, ToggleMenuMsg,
};

use crate::{key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Handles one message.
    ///
    /// Pointer messages ([`ClickAwayMsg`], [`ItemClickMsg`], [`ToggleMenuMsg`],
    /// [`ClearMsg`]) are always handled. Key messages are handled only while
    /// focused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<ClickAwayMsg>().is_some() {
            self.click_away();
        } else if let Some(ItemClickMsg(index)) = msg.downcast_ref::<ItemClickMsg>() {
            self.select_shown(*index);
        } else if msg.downcast_ref::<ToggleMenuMsg>().is_some() {
            self.toggle_menu();
        } else if msg.downcast_ref::<ClearMsg>().is_some() {
            self.clear();
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus {
                self.handle_key(key_msg);
            }
        }
        None
    }

    /// Routes a key press: navigator keys first, then cancel and clear, then
    /// ordinary text editing, which re-filters.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) {
        if let Some(nav) = self.keymap.nav_key(key_msg) {
            self.navigate(nav);
            return;
        }
        if self.keymap.cancel.matches(key_msg) {
            self.click_away();
            return;
        }
        if self.keymap.clear.matches(key_msg) {
            self.clear();
            return;
        }

        match key_msg.key {
            KeyCode::Backspace => {
                let mut text = self.state.typed_text.clone();
                if let Some((start, _)) = text.grapheme_indices(true).next_back() {
                    text.truncate(start);
                    self.on_text_changed(&text);
                }
            }
            KeyCode::Char(c)
                if !key_msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut text = self.state.typed_text.clone();
                text.push(c);
                self.on_text_changed(&text);
            }
            _ => {}
        }
    }

    /// Renders the trigger and, while visible, the item menu.
    pub fn view(&self) -> String {
        let trigger = self.view_trigger();
        if self.state.menu_visible {
            format!("{}\n{}", trigger, self.view_menu())
        } else {
            trigger
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl key::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        key::KeyMap::short_help(&self.keymap)
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        key::KeyMap::full_help(&self.keymap)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::from_store(CandidateStore::default(), ComboBoxOptions::default());
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
