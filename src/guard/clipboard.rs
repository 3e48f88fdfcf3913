//! Clipboard access injected into the guard.
//!
//! Paste and drop events do not always carry their text. The guard then asks
//! its [`ClipboardSource`] instead of reaching for a global clipboard, so it
//! can be driven with a fixed payload in tests.

use std::cell::RefCell;

/// Read-only access to clipboard text
pub trait ClipboardSource {
    /// Current clipboard text, `None` if empty or unavailable
    fn read_text(&self) -> Option<String>;
}

/// The system clipboard (via arboard)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!("Clipboard has no text: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                None
            }
        }
    }
}

/// No clipboard; every read is empty
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSource for NoClipboard {
    fn read_text(&self) -> Option<String> {
        None
    }
}

/// In-memory clipboard holding a replaceable payload
#[derive(Debug, Default)]
pub struct FixedClipboard {
    text: RefCell<Option<String>>,
}

impl FixedClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
        }
    }

    /// Replace the payload
    pub fn set(&self, text: Option<&str>) {
        *self.text.borrow_mut() = text.map(str::to_string);
    }
}

impl ClipboardSource for FixedClipboard {
    fn read_text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl<C: ClipboardSource + ?Sized> ClipboardSource for std::rc::Rc<C> {
    fn read_text(&self) -> Option<String> {
        (**self).read_text()
    }
}
