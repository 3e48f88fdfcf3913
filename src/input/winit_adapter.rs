//! Adapter from winit key and IME events to guard input

use winit::event::Ime;
use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};
use crate::guard::EditEvent;

/// Convert winit key event data to our Keystroke type
///
/// Returns None if the key cannot be mapped (e.g., unknown keys)
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool, // logo = meta = cmd on macOS
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, logo);

    // Numpad keys are identified physically so they classify the same
    // regardless of NumLock layout quirks
    let numpad = match physical_key {
        PhysicalKey::Code(code) => match code {
            WinitKeyCode::Numpad0 => Some(KeyCode::Numpad(0)),
            WinitKeyCode::Numpad1 => Some(KeyCode::Numpad(1)),
            WinitKeyCode::Numpad2 => Some(KeyCode::Numpad(2)),
            WinitKeyCode::Numpad3 => Some(KeyCode::Numpad(3)),
            WinitKeyCode::Numpad4 => Some(KeyCode::Numpad(4)),
            WinitKeyCode::Numpad5 => Some(KeyCode::Numpad(5)),
            WinitKeyCode::Numpad6 => Some(KeyCode::Numpad(6)),
            WinitKeyCode::Numpad7 => Some(KeyCode::Numpad(7)),
            WinitKeyCode::Numpad8 => Some(KeyCode::Numpad(8)),
            WinitKeyCode::Numpad9 => Some(KeyCode::Numpad(9)),
            WinitKeyCode::NumpadSubtract => Some(KeyCode::NumpadSubtract),
            WinitKeyCode::NumpadDecimal => Some(KeyCode::NumpadDecimal),
            _ => None,
        },
        PhysicalKey::Unidentified(_) => None,
    };

    // With NumLock off the logical key is a navigation key; keep that
    let logical = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Space => Some(KeyCode::Space),

            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),
            NamedKey::Insert => Some(KeyCode::Insert),

            NamedKey::F1 => Some(KeyCode::F(1)),
            NamedKey::F2 => Some(KeyCode::F(2)),
            NamedKey::F3 => Some(KeyCode::F(3)),
            NamedKey::F4 => Some(KeyCode::F(4)),
            NamedKey::F5 => Some(KeyCode::F(5)),
            NamedKey::F6 => Some(KeyCode::F(6)),
            NamedKey::F7 => Some(KeyCode::F(7)),
            NamedKey::F8 => Some(KeyCode::F(8)),
            NamedKey::F9 => Some(KeyCode::F(9)),
            NamedKey::F10 => Some(KeyCode::F(10)),
            NamedKey::F11 => Some(KeyCode::F(11)),
            NamedKey::F12 => Some(KeyCode::F(12)),

            _ => None,
        },

        Key::Character(s) => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    };

    let key_code = match (logical, numpad) {
        (Some(KeyCode::Char(_)) | None, Some(pad)) => Some(pad),
        (logical, _) => logical,
    };

    key_code.map(|key| Keystroke::new(key, mods))
}

/// Convert a winit IME event to an edit event.
///
/// Only a commit inserts text; pre-edit updates are tracked by
/// [`super::CompositionState`] and never reach the buffer.
pub fn edit_event_from_ime(ime: &Ime) -> Option<EditEvent> {
    match ime {
        Ime::Commit(text) => Some(EditEvent::composition(text.clone())),
        Ime::Preedit(..) | Ime::Enabled | Ime::Disabled => None,
    }
}
