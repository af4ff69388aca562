//! Keyboard events forwarded through navigation containers.

use serde::{Deserialize, Serialize};

/// Keyboard key codes relevant to navigation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return
    Enter,
    /// Space bar
    Space,
    /// Tab
    Tab,
    /// Escape
    Escape,
    /// Home
    Home,
    /// End
    End,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any other key, carried for pass-through only
    Other,
}

/// Modifier state captured with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift held
    pub shift: bool,
    /// Control held
    pub ctrl: bool,
    /// Alt held
    pub alt: bool,
    /// Meta (Windows/Command) held
    pub meta: bool,
}

/// A key-down event delivered to a navigation container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key pressed
    pub key: Key,
    /// Modifier state
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_new_has_no_modifiers() {
        let event = KeyEvent::new(Key::Tab);
        assert_eq!(event.key, Key::Tab);
        assert_eq!(event.modifiers, Modifiers::default());
    }

    #[test]
    fn test_key_event_deserialize_without_modifiers() {
        let event: KeyEvent = serde_json::from_str(r#"{"key":"End"}"#).unwrap();
        assert_eq!(event, KeyEvent::new(Key::End));
    }
}
