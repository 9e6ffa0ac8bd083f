#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-combobox/")]

//! # bubbletea-combobox
//!
//! A type-ahead select (combo-box) component for terminal applications built
//! with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The combo-box is a text field that filters a list of candidates as the
//! user types. Filtered results can be walked with the arrow keys and a
//! selection is committed with Enter, by typing a candidate's exact name, or
//! by clicking an item. Clicking away (or pressing Esc) reverts the field to
//! the last committed selection.
//!
//! Like the other bubbletea components it follows the Elm Architecture with
//! `update()` and `view()` methods. Popup positioning and click-outside
//! detection stay with the host, which forwards pointer events as messages.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_combobox::prelude::*;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut combo = ComboBox::new(
//!     vec![Item::new("1", "Apple"), Item::new("2", "Banana")],
//!     ComboBoxOptions::default(),
//! )
//! .unwrap();
//!
//! for c in "an".chars() {
//!     combo.update(Box::new(KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE }));
//! }
//! assert_eq!(combo.shown_len(), 1);
//!
//! combo.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
//! combo.update(Box::new(KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE }));
//! assert_eq!(combo.typed_text(), "Banana");
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events for commits,
//! rejected free text and click-away reverts. It never installs a
//! subscriber; that is left to the application.

pub mod combobox;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input. Pointer messages are
/// delivered regardless of focus.
///
/// ```rust
/// use bubbletea_combobox::prelude::*;
///
/// let mut combo = ComboBox::new(
///     vec![Item::new("1", "Apple")],
///     ComboBoxOptions::default().with_disable_auto_focus(true),
/// )
/// .unwrap();
/// assert!(!combo.focused());
///
/// combo.focus();
/// assert!(combo.focused());
///
/// combo.blur();
/// assert!(!combo.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the bubbletea runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use combobox::Model as ComboBox;
pub use combobox::{
    CandidateStore, ComboBoxOptions, ComboBoxStyles, ComboKeyMap, InteractionStatus, Item,
    MenuStatus, NavKey, SelectionState, StoreError,
};
pub use key::{Binding, KeyMap, KeyPress};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_combobox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combobox::Model as ComboBox;
    pub use crate::combobox::{
        CandidateStore, ClearMsg, ClickAwayMsg, ComboBoxOptions, ComboBoxStyles, ComboKeyMap,
        InteractionStatus, Item, ItemClickMsg, MenuStatus, NavKey, SelectionState, StoreError,
        ToggleMenuMsg,
    };
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::Component;
}
