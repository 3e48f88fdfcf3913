//! NumberField - a numeric text field with its input guard wired in.
//!
//! The field plays the host widget's part: it owns the text and selection
//! and applies mutations, but only after the guard has accepted them. Value
//! arithmetic (min/max/step) is left to whatever widget displays the field,
//! and so are cut, copy, undo and redo: those shortcuts pass through
//! untouched.

use winit::event::Ime;

use super::buffer::StringBuffer;
use super::selection::Selection;
use crate::config::NumericConstraints;
use crate::grammar::GrammarError;
use crate::guard::{
    ClipboardSource, EditEvent, NumericGuard, SystemClipboard, TextSurface, Verdict,
};
use crate::input::{edit_event_from_ime, CompositionState, KeyClass, KeyCode, Keystroke, Shortcut};

/// On-screen keyboard hint for the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Digits and a decimal separator
    Decimal,
    /// Digits only
    Numeric,
}

/// A guarded numeric text field
#[derive(Debug)]
pub struct NumberField {
    buffer: StringBuffer,
    selection: Selection,
    guard: NumericGuard,
    composition: CompositionState,
}

impl TextSurface for NumberField {
    fn text(&self) -> &str {
        self.buffer.as_str()
    }

    fn selection_start(&self) -> Option<usize> {
        Some(self.selection.start())
    }

    fn selection_end(&self) -> Option<usize> {
        Some(self.selection.end())
    }
}

impl NumberField {
    /// Create an empty field reading the system clipboard
    pub fn new(constraints: NumericConstraints) -> Result<Self, GrammarError> {
        Self::with_clipboard(constraints, Box::new(SystemClipboard))
    }

    /// Create an empty field with an explicit clipboard source
    pub fn with_clipboard(
        constraints: NumericConstraints,
        clipboard: Box<dyn ClipboardSource>,
    ) -> Result<Self, GrammarError> {
        Ok(Self {
            buffer: StringBuffer::new(),
            selection: Selection::default(),
            guard: NumericGuard::with_clipboard(constraints, clipboard)?,
            composition: CompositionState::new(),
        })
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The guard judging this field's edits
    pub fn guard(&self) -> &NumericGuard {
        &self.guard
    }

    /// Place the selection (char offsets, clamped to the text)
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(anchor, head).clamped(self.buffer.len_chars());
    }

    /// Collapse the selection to a caret at `offset`
    pub fn set_caret(&mut self, offset: usize) {
        self.set_selection(offset, offset);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }

    /// True while an IME composition is in progress
    pub fn is_composing(&self) -> bool {
        self.composition.is_composing()
    }

    /// Replace the constraints; the next edit is judged by the new grammar.
    /// Existing text is left as it is.
    pub fn set_constraints(
        &mut self,
        constraints: NumericConstraints,
    ) -> Result<bool, GrammarError> {
        self.guard.set_constraints(constraints)
    }

    /// Bind a value from outside (e.g. application state).
    ///
    /// Refused, leaving the field unchanged, if the value is not a valid
    /// entry under the current constraints.
    pub fn set_text(&mut self, value: &str) -> bool {
        let text = parse_display(Some(value));
        if !self.guard.matcher().accepts(&text) {
            tracing::debug!(value, "refused bound value");
            return false;
        }
        self.buffer.set_content(&text);
        self.set_caret(self.buffer.len_chars());
        true
    }

    /// The bound value for the current text
    pub fn value(&self) -> String {
        format_value(self.buffer.as_str())
    }

    /// True if the text is a finished number rather than an intermediate state
    pub fn is_complete(&self) -> bool {
        self.guard.matcher().is_complete(self.buffer.as_str())
    }

    pub fn input_mode(&self) -> InputMode {
        if self.guard.constraints().allow_decimal {
            InputMode::Decimal
        } else {
            InputMode::Numeric
        }
    }

    /// Pre-mutation entry point. Accepted insertions replace the selection;
    /// deletions and other kinds are left to the delete methods.
    pub fn before_input(&mut self, event: &EditEvent) -> Verdict {
        let Some(inserted) = self.guard.inserted_text(event) else {
            return Verdict::PassThrough;
        };
        self.insert_checked(&inserted)
    }

    /// Discrete key press. Text-producing keys that survive the key layer
    /// are inserted through [`Self::before_input`], once.
    pub fn key_press(&mut self, stroke: &Keystroke) -> Verdict {
        let composing = self.composition.is_composing();
        let verdict = self.guard.key_press(&*self, stroke, composing);
        if verdict.is_rejected() || composing {
            return verdict;
        }

        match KeyClass::of(stroke) {
            KeyClass::Control => {
                self.control_key(stroke);
                Verdict::PassThrough
            }
            KeyClass::Shortcut(Shortcut::SelectAll) => {
                self.select_all();
                Verdict::PassThrough
            }
            KeyClass::Shortcut(Shortcut::Paste) => self.paste(None),
            KeyClass::Shortcut(_) => Verdict::PassThrough,
            KeyClass::Digit(_) | KeyClass::DecimalPoint | KeyClass::Minus => {
                match stroke.key.text() {
                    Some(ch) => self.before_input(&EditEvent::key(ch)),
                    None => Verdict::PassThrough,
                }
            }
            KeyClass::Other => Verdict::Reject,
        }
    }

    /// Paste layer. `clipboard_text` is the paste payload if the host has
    /// one; otherwise the guard's clipboard is read.
    pub fn paste(&mut self, clipboard_text: Option<&str>) -> Verdict {
        let text = self.guard.paste_text(clipboard_text);
        self.insert_checked(&text)
    }

    /// IME event. Pre-edit text is only tracked; a commit is inserted if
    /// the guard accepts it.
    pub fn ime(&mut self, ime: &Ime) -> Verdict {
        self.composition.apply(ime);
        match edit_event_from_ime(ime) {
            Some(event) => self.before_input(&event),
            None => Verdict::PassThrough,
        }
    }

    /// Delete the selection, or the char before the caret
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = self.selection.head;
        if caret == 0 {
            return false;
        }
        self.buffer.remove(caret - 1..caret);
        self.set_caret(caret - 1);
        true
    }

    /// Delete the selection, or the char after the caret
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let caret = self.selection.head;
        if caret >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(caret..caret + 1);
        true
    }

    fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let (start, end) = (self.selection.start(), self.selection.end());
        self.buffer.remove(start..end);
        self.set_caret(start);
        true
    }

    /// An empty insertion (no paste payload, unreadable clipboard) is
    /// accepted but leaves the selection in place.
    fn insert_checked(&mut self, text: &str) -> Verdict {
        let verdict = self.guard.check_insert(&*self, text);
        if verdict == Verdict::Accept && !text.is_empty() {
            self.replace_selection(text);
        }
        verdict
    }

    fn replace_selection(&mut self, text: &str) {
        let start = self.selection.start();
        self.buffer.replace(start..self.selection.end(), text);
        self.set_caret(start + text.chars().count());
    }

    fn control_key(&mut self, stroke: &Keystroke) {
        let extend = stroke.mods.shift();
        let len = self.buffer.len_chars();
        match stroke.key {
            KeyCode::Backspace => {
                self.delete_backward();
            }
            KeyCode::Delete => {
                self.delete_forward();
            }
            KeyCode::Left if !extend && !self.selection.is_empty() => {
                self.set_caret(self.selection.start());
            }
            KeyCode::Right if !extend && !self.selection.is_empty() => {
                self.set_caret(self.selection.end());
            }
            KeyCode::Left => self.move_head(self.selection.head.saturating_sub(1), extend),
            KeyCode::Right => self.move_head((self.selection.head + 1).min(len), extend),
            KeyCode::Home => self.move_head(0, extend),
            KeyCode::End => self.move_head(len, extend),
            // Stepping, focus and submit belong to the hosting widget
            _ => {}
        }
    }

    fn move_head(&mut self, offset: usize, extend: bool) {
        if extend {
            self.selection.extend_to(offset);
        } else {
            self.selection = Selection::collapsed(offset);
        }
    }
}

/// Display text to bound value. Identity: the field never reformats.
pub fn parse_display(display: Option<&str>) -> String {
    display.map(str::to_string).unwrap_or_default()
}

/// Bound value to display text. Identity.
pub fn format_value(value: &str) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::NoClipboard;

    fn field(constraints: NumericConstraints) -> NumberField {
        NumberField::with_clipboard(constraints, Box::new(NoClipboard)).unwrap()
    }

    #[test]
    fn test_typing_digits() {
        let mut f = field(NumericConstraints::default());
        for c in ['1', '2', '.', '5'] {
            assert_eq!(f.key_press(&Keystroke::char(c)), Verdict::Accept);
        }
        assert_eq!(f.text(), "12.5");
        assert_eq!(f.selection(), Selection::collapsed(4));
    }

    #[test]
    fn test_rejected_key_leaves_buffer() {
        let mut f = field(NumericConstraints::default());
        f.set_text("12");
        assert_eq!(f.key_press(&Keystroke::char('e')), Verdict::Reject);
        assert_eq!(f.key_press(&Keystroke::key(KeyCode::Space)), Verdict::Reject);
        assert_eq!(f.text(), "12");
    }

    #[test]
    fn test_navigation_and_delete() {
        let mut f = field(NumericConstraints::default());
        f.set_text("123");
        f.key_press(&Keystroke::key(KeyCode::Left));
        f.key_press(&Keystroke::key(KeyCode::Backspace));
        assert_eq!(f.text(), "13");
        assert_eq!(f.selection(), Selection::collapsed(1));

        f.key_press(&Keystroke::key(KeyCode::Home));
        f.key_press(&Keystroke::key(KeyCode::Delete));
        assert_eq!(f.text(), "3");
    }

    #[test]
    fn test_shift_extends_selection() {
        let mut f = field(NumericConstraints::default());
        f.set_text("123");
        f.key_press(&Keystroke::new(
            KeyCode::Home,
            crate::input::Modifiers::SHIFT,
        ));
        assert_eq!(f.selection(), Selection::new(3, 0));
        assert_eq!(f.key_press(&Keystroke::char('9')), Verdict::Accept);
        assert_eq!(f.text(), "9");
    }

    #[test]
    fn test_select_all_shortcut() {
        let mut f = field(NumericConstraints::default());
        f.set_text("-4.2");
        f.key_press(&Keystroke::cmd('a'));
        assert_eq!(f.selection(), Selection::new(0, 4));
    }

    #[test]
    fn test_empty_paste_keeps_selection() {
        let mut f = field(NumericConstraints::default());
        f.set_text("12.5");
        f.key_press(&Keystroke::cmd('a'));
        assert_eq!(f.key_press(&Keystroke::cmd('v')), Verdict::Accept);
        assert_eq!(f.text(), "12.5");
        assert_eq!(f.selection(), Selection::new(0, 4));
    }

    #[test]
    fn test_set_text_refuses_invalid() {
        let mut f = field(NumericConstraints::integer(3));
        assert!(f.set_text("-123"));
        assert!(!f.set_text("1234"));
        assert!(!f.set_text("1.5"));
        assert_eq!(f.text(), "-123");
        assert_eq!(f.value(), "-123");
    }

    #[test]
    fn test_input_mode() {
        assert_eq!(
            field(NumericConstraints::default()).input_mode(),
            InputMode::Decimal
        );
        assert_eq!(
            field(NumericConstraints::integer(4)).input_mode(),
            InputMode::Numeric
        );
    }

    #[test]
    fn test_is_complete() {
        let mut f = field(NumericConstraints::default());
        assert!(!f.is_complete());
        f.set_text("-");
        assert!(!f.is_complete());
        f.set_text("-3.");
        assert!(!f.is_complete());
        f.set_text("-3.1");
        assert!(f.is_complete());
    }

    #[test]
    fn test_parse_display_identity() {
        assert_eq!(parse_display(None), "");
        assert_eq!(parse_display(Some("1.50")), "1.50");
        assert_eq!(format_value("007"), "007");
    }
}
