//! Core key types: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys held during a keystroke, as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= Self::CTRL.0;
        }
        if shift {
            bits |= Self::SHIFT.0;
        }
        if alt {
            bits |= Self::ALT.0;
        }
        if meta {
            bits |= Self::META.0;
        }
        Modifiers(bits)
    }

    #[inline]
    const fn has(self, flag: Modifiers) -> bool {
        self.0 & flag.0 != 0
    }

    /// Check if shift is held (extends the selection on navigation keys)
    #[inline]
    pub const fn shift(self) -> bool {
        self.has(Self::SHIFT)
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the platform-specific "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Check if the platform command key is held, which turns letter keys
    /// into shortcuts
    pub fn has_cmd(self) -> bool {
        self.has(Self::cmd())
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (alt, meta) = if cfg!(target_os = "macos") {
            ("Option", "Cmd")
        } else {
            ("Alt", "Win")
        };
        let names = [
            (Self::CTRL, "Ctrl"),
            (Self::SHIFT, "Shift"),
            (Self::ALT, alt),
            (Self::META, meta),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.has(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", held.join("+"))
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    /// Function key F1-F24
    F(u8),

    /// Numpad digit 0-9
    Numpad(u8),
    NumpadSubtract,
    NumpadDecimal,
}

impl KeyCode {
    /// Text this key inserts when typed without a command modifier
    pub fn text(self) -> Option<char> {
        match self {
            KeyCode::Char(c) => Some(c),
            KeyCode::Space => Some(' '),
            KeyCode::Numpad(n) => char::from_digit(u32::from(n), 10),
            KeyCode::NumpadSubtract => Some('-'),
            KeyCode::NumpadDecimal => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad(n) => write!(f, "Num{}", n),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadDecimal => write!(f, "Num."),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character and the platform command modifier
    pub fn cmd(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::cmd(),
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_from_flags() {
        let mods = Modifiers::new(true, true, false, false);
        assert!(mods.shift());
        assert!(!mods.is_empty());
        assert_eq!(format!("{}", mods), "Ctrl+Shift");
        assert!(Modifiers::new(false, false, false, false).is_empty());
    }

    #[test]
    fn test_cmd_modifier_matches_platform() {
        assert!(Modifiers::cmd().has_cmd());
        assert!(!Modifiers::SHIFT.has_cmd());
    }

    #[test]
    fn test_key_text() {
        assert_eq!(KeyCode::Char('7').text(), Some('7'));
        assert_eq!(KeyCode::Numpad(3).text(), Some('3'));
        assert_eq!(KeyCode::NumpadDecimal.text(), Some('.'));
        assert_eq!(KeyCode::NumpadSubtract.text(), Some('-'));
        assert_eq!(KeyCode::Left.text(), None);
        assert_eq!(KeyCode::F(5).text(), None);
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL);
        let display = format!("{}", stroke);
        assert!(display.contains('V'));
        assert!(display.contains("Ctrl"));
    }
}
