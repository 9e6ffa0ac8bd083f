//! Type-safe key bindings shared by the combo-box components.
//!
//! A [`Binding`] groups one or more key presses under a single action along
//! with the short help text shown to users. Components expose their bindings
//! through the [`KeyMap`] trait so a help view can list them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held exactly.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↓/ctrl+n"`.
    pub key: String,
    /// Action description, e.g. `"down"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
///
/// # Examples
///
/// ```
/// use bubbletea_combobox::key::Binding;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let down = Binding::new(vec![
///     KeyCode::Down.into(),
///     (KeyCode::Char('n'), KeyModifiers::CONTROL).into(),
/// ])
/// .with_help("↓/ctrl+n", "down");
///
/// assert_eq!(down.help().desc, "down");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Attaches help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the bound key presses.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether `key_msg` triggers this binding.
    ///
    /// For character keys the SHIFT modifier is ignored, since terminals
    /// already deliver the shifted character.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != key_msg.key {
                return false;
            }
            match press.code {
                KeyCode::Char(_) => {
                    press.modifiers == key_msg.modifiers.difference(KeyModifiers::SHIFT)
                }
                _ => press.modifiers == key_msg.modifiers,
            }
        })
    }
}

/// Implemented by components that publish their key bindings.
pub trait KeyMap {
    /// The essential bindings, shown on a single line.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_code_and_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL).into()]);
        assert!(b.matches(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('n'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('p'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_binding_char_ignores_shift() {
        let b = Binding::new(vec![KeyCode::Char('G').into()]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter.into()]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
