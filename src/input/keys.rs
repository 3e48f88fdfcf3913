//! Key classification for the discrete key-press layer of the guard

use super::types::{KeyCode, Keystroke};

/// What a key press means to a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Navigation, deletion and form keys; never mutate through insertion
    Control,
    /// Command-modified clipboard/select-all/undo/redo shortcut
    Shortcut(Shortcut),
    /// An ASCII digit
    Digit(char),
    /// The `.` key
    DecimalPoint,
    /// The `-` key
    Minus,
    /// Anything else: letters, symbols, space, function keys
    Other,
}

/// Clipboard, select-all and history shortcuts (platform command modifier + letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    SelectAll,
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
}

impl Shortcut {
    fn from_letter(c: char) -> Option<Self> {
        match c {
            'a' => Some(Shortcut::SelectAll),
            'c' => Some(Shortcut::Copy),
            'v' => Some(Shortcut::Paste),
            'x' => Some(Shortcut::Cut),
            'z' => Some(Shortcut::Undo),
            'y' => Some(Shortcut::Redo),
            _ => None,
        }
    }
}

impl KeyClass {
    /// Classify a keystroke.
    ///
    /// A command-modified key that is not a shortcut falls through to the
    /// ordinary classification, so `Ctrl+5` is still checked as a digit.
    pub fn of(stroke: &Keystroke) -> Self {
        if stroke.mods.has_cmd() {
            if let KeyCode::Char(c) = stroke.key {
                if let Some(shortcut) = Shortcut::from_letter(c.to_ascii_lowercase()) {
                    return KeyClass::Shortcut(shortcut);
                }
            }
        }

        match stroke.key {
            KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Tab
            | KeyCode::Enter
            | KeyCode::Escape
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down => KeyClass::Control,
            KeyCode::Char(c) if c.is_ascii_digit() => KeyClass::Digit(c),
            KeyCode::Numpad(n) if n < 10 => match stroke.key.text() {
                Some(c) => KeyClass::Digit(c),
                None => KeyClass::Other,
            },
            KeyCode::Char('.') | KeyCode::NumpadDecimal => KeyClass::DecimalPoint,
            KeyCode::Char('-') | KeyCode::NumpadSubtract => KeyClass::Minus,
            _ => KeyClass::Other,
        }
    }
}
