//! Single-line text buffer addressed by char offsets

use std::ops::Range;

use crate::util::{char_len, char_to_byte};

/// Text buffer for a single-line input (backed by `String`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert text at character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = char_to_byte(&self.text, offset);
        self.text.insert_str(byte_offset, text);
    }

    /// Remove text in character range (clamped)
    pub fn remove(&mut self, range: Range<usize>) {
        let start = char_to_byte(&self.text, range.start);
        let end = char_to_byte(&self.text, range.end).max(start);
        self.text.replace_range(start..end, "");
    }

    /// Replace text in range with new text
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    /// Set content, replacing everything
    pub fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
