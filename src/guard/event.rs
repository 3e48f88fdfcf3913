//! Normalized edit events consumed by the guard.
//!
//! UI toolkits describe text mutations in many shapes (DOM `beforeinput`
//! with an `inputType`, winit IME events, key events, paste callbacks). The
//! adapters build one [`EditEvent`] from whichever shape they receive.

/// Where an insertion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A typed character
    Key,
    /// Committed IME composition text
    Composition,
    /// Clipboard paste
    Paste,
    /// Drag and drop
    Drop,
}

impl Channel {
    /// Channels whose payload may be missing from the event and must be
    /// recovered from the clipboard
    pub fn reads_clipboard(self) -> bool {
        matches!(self, Channel::Paste | Channel::Drop)
    }
}

/// A proposed text mutation, raised before the buffer changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Text is about to be inserted at the selection
    Insert {
        channel: Channel,
        /// Inserted text; `None` when the event carries no payload
        data: Option<String>,
    },
    /// Content is about to be deleted
    Delete,
    /// Any other mutation kind (formatting, history)
    Other,
}

impl EditEvent {
    pub fn insert(channel: Channel, data: impl Into<String>) -> Self {
        EditEvent::Insert {
            channel,
            data: Some(data.into()),
        }
    }

    /// Typed character
    pub fn key(ch: char) -> Self {
        Self::insert(Channel::Key, ch.to_string())
    }

    /// Committed composition text
    pub fn composition(text: impl Into<String>) -> Self {
        Self::insert(Channel::Composition, text)
    }

    /// Paste with known text
    pub fn paste(text: impl Into<String>) -> Self {
        Self::insert(Channel::Paste, text)
    }

    /// Paste or drop without payload
    pub fn without_data(channel: Channel) -> Self {
        EditEvent::Insert {
            channel,
            data: None,
        }
    }

    /// Build from a DOM-style `inputType` (`insertText`, `insertFromPaste`,
    /// `deleteContentBackward`, ...)
    pub fn from_input_type(input_type: &str, data: Option<&str>) -> Self {
        let data = data.map(str::to_string);
        if let Some(kind) = input_type.strip_prefix("insert") {
            let channel = match kind {
                "CompositionText" | "FromComposition" => Channel::Composition,
                "FromDrop" => Channel::Drop,
                k if k.starts_with("FromPaste") => Channel::Paste,
                _ => Channel::Key,
            };
            EditEvent::Insert { channel, data }
        } else if input_type.starts_with("delete") {
            EditEvent::Delete
        } else {
            EditEvent::Other
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not an insertion; the guard has no opinion
    PassThrough,
    /// The candidate text matches the grammar
    Accept,
    /// Cancel the mutation; the buffer must stay unchanged
    Reject,
}

impl Verdict {
    #[inline]
    pub fn is_rejected(self) -> bool {
        self == Verdict::Reject
    }

    pub(crate) fn from_match(accepted: bool) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}
