//! Platform-agnostic key event types.
//!
//! Every display adapter maps its native keyboard input to these types. The
//! shell engine never sees raw scan codes or terminal escape sequences.

use serde::{Deserialize, Serialize};

/// Logical identity of a pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A character key. Modifier state decides whether it is printable.
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    /// Any key the shell has no binding for (arrows, function keys, ...).
    Other,
}

/// Modifier keys held while a key was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    /// Command key on macOS, Windows key elsewhere.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl held alone.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Meta (Cmd) held alone.
    pub const META: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: true,
    };

    /// True if any modifier that turns a character into a shortcut is held.
    ///
    /// Shift only changes which character is produced, so it does not count.
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A single discrete key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// An unmodified key press.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// An unmodified character key press.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// A Ctrl-qualified character key press.
    pub fn ctrl(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::CTRL)
    }

    /// The character this event inserts into the input line, if any.
    ///
    /// Control characters and shortcut chords (Ctrl/Alt/Meta) never insert.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(ch) if !ch.is_control() && !self.modifiers.is_command() => Some(ch),
            _ => None,
        }
    }

    /// True for Ctrl+K or Cmd+K, the clear-screen shortcut.
    pub fn is_clear_shortcut(&self) -> bool {
        matches!(self.key, Key::Char('k' | 'K'))
            && (self.modifiers.ctrl || self.modifiers.meta)
            && !self.modifiers.alt
    }
}
