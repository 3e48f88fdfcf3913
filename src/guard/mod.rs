//! Input guard for numeric fields.
//!
//! The guard keeps a text surface inside the numeric grammar by judging every
//! proposed mutation *before* it reaches the buffer:
//!
//! - [`NumericGuard::before_input`]: the authoritative pre-mutation check for
//!   typed text, IME commits, paste and drop
//! - [`NumericGuard::key_press`]: a best-effort discrete key layer, skipped
//!   while an IME composition is active
//! - [`NumericGuard::paste`]: fallback for hosts without a pre-mutation hook
//!
//! Each check builds the candidate text (current text with the selection
//! replaced by the inserted text) and accepts or rejects it as a whole. The
//! guard never edits text itself and never fails: missing selection bounds
//! mean "caret at end of text", missing payloads mean "empty".

mod clipboard;
mod event;

pub use clipboard::{ClipboardSource, FixedClipboard, NoClipboard, SystemClipboard};
pub use event::{Channel, EditEvent, Verdict};

use crate::config::NumericConstraints;
use crate::grammar::{GrammarError, Matcher};
use crate::input::{KeyClass, Keystroke};
use crate::util::{char_len, char_to_byte};

/// Read access to the text surface a guard protects.
///
/// Selection bounds are char offsets; `None` means the host did not report one.
pub trait TextSurface {
    fn text(&self) -> &str;
    fn selection_start(&self) -> Option<usize>;
    fn selection_end(&self) -> Option<usize>;
}

/// A borrowed `(text, selection_start, selection_end)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSnapshot<'a> {
    pub text: &'a str,
    pub selection_start: Option<usize>,
    pub selection_end: Option<usize>,
}

impl<'a> TextSnapshot<'a> {
    pub fn new(text: &'a str, selection_start: usize, selection_end: usize) -> Self {
        Self {
            text,
            selection_start: Some(selection_start),
            selection_end: Some(selection_end),
        }
    }

    /// Caret at `offset`
    pub fn caret(text: &'a str, offset: usize) -> Self {
        Self::new(text, offset, offset)
    }

    /// No selection reported
    pub fn unselected(text: &'a str) -> Self {
        Self {
            text,
            selection_start: None,
            selection_end: None,
        }
    }
}

impl TextSurface for TextSnapshot<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn selection_start(&self) -> Option<usize> {
        self.selection_start
    }

    fn selection_end(&self) -> Option<usize> {
        self.selection_end
    }
}

/// Normalize selection bounds against `text`: absent bounds become the end
/// of text, out-of-range bounds are clamped, reversed bounds are swapped.
pub fn selection_range(
    text: &str,
    start: Option<usize>,
    end: Option<usize>,
) -> (usize, usize) {
    let len = char_len(text);
    let start = start.unwrap_or(len).min(len);
    let end = end.unwrap_or(len).min(len);
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// `text[..start] + insert + text[end..]` over char offsets
pub fn build_candidate(text: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end).max(start_byte);
    let mut candidate = String::with_capacity(text.len() + insert.len());
    candidate.push_str(&text[..start_byte]);
    candidate.push_str(insert);
    candidate.push_str(&text[end_byte..]);
    candidate
}

/// Guards a numeric text surface against mutations that leave the grammar
pub struct NumericGuard {
    constraints: NumericConstraints,
    matcher: Matcher,
    clipboard: Box<dyn ClipboardSource>,
}

impl std::fmt::Debug for NumericGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericGuard")
            .field("constraints", &self.constraints)
            .field("pattern", &self.matcher.pattern())
            .finish_non_exhaustive()
    }
}

impl NumericGuard {
    /// Create a guard with the system clipboard as paste/drop fallback
    pub fn new(constraints: NumericConstraints) -> Result<Self, GrammarError> {
        Self::with_clipboard(constraints, Box::new(SystemClipboard))
    }

    /// Create a guard with an explicit clipboard source
    pub fn with_clipboard(
        constraints: NumericConstraints,
        clipboard: Box<dyn ClipboardSource>,
    ) -> Result<Self, GrammarError> {
        let matcher = Matcher::build(&constraints)?;
        Ok(Self {
            constraints,
            matcher,
            clipboard,
        })
    }

    pub fn constraints(&self) -> &NumericConstraints {
        &self.constraints
    }

    /// The matcher for the current constraints
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Replace the constraints, rebuilding the matcher before the next check.
    ///
    /// Returns `Ok(false)` if nothing changed. On error the previous
    /// constraints and matcher stay in effect.
    pub fn set_constraints(
        &mut self,
        constraints: NumericConstraints,
    ) -> Result<bool, GrammarError> {
        if constraints == self.constraints {
            return Ok(false);
        }
        let matcher = Matcher::build(&constraints)?;
        tracing::debug!(
            target: "numfield::guard",
            old = ?self.constraints,
            new = ?constraints,
            "constraints changed, matcher rebuilt"
        );
        self.constraints = constraints;
        self.matcher = matcher;
        Ok(true)
    }

    /// Check inserting `insert` over the surface's selection
    pub fn check_insert<S: TextSurface + ?Sized>(&self, surface: &S, insert: &str) -> Verdict {
        let text = surface.text();
        let (start, end) =
            selection_range(text, surface.selection_start(), surface.selection_end());
        let candidate = build_candidate(text, start, end, insert);
        let verdict = Verdict::from_match(self.matcher.accepts(&candidate));
        self.log(verdict, text, &candidate);
        verdict
    }

    /// Text an event would insert, or `None` for non-insertions.
    ///
    /// A paste or drop without payload reads the injected clipboard.
    pub fn inserted_text(&self, event: &EditEvent) -> Option<String> {
        let EditEvent::Insert { channel, data } = event else {
            return None;
        };

        let text = match data.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ if channel.reads_clipboard() => self.clipboard.read_text().unwrap_or_default(),
            _ => String::new(),
        };
        Some(text)
    }

    /// Pre-mutation check for every insertion channel.
    ///
    /// Deletions and other non-insertions pass through.
    pub fn before_input<S: TextSurface + ?Sized>(
        &self,
        surface: &S,
        event: &EditEvent,
    ) -> Verdict {
        match self.inserted_text(event) {
            Some(inserted) => self.check_insert(surface, &inserted),
            None => Verdict::PassThrough,
        }
    }

    /// Discrete key-press check.
    ///
    /// `composing` is true while an IME composition is in progress; composed
    /// text is judged by [`Self::before_input`] on commit instead.
    pub fn key_press<S: TextSurface + ?Sized>(
        &self,
        surface: &S,
        stroke: &Keystroke,
        composing: bool,
    ) -> Verdict {
        if composing {
            return Verdict::PassThrough;
        }

        match KeyClass::of(stroke) {
            KeyClass::Control | KeyClass::Shortcut(_) => Verdict::PassThrough,
            KeyClass::Digit(c) => self.check_insert(surface, c.encode_utf8(&mut [0; 4])),
            KeyClass::DecimalPoint => self.check_insert(surface, "."),
            KeyClass::Minus => {
                let text = surface.text();
                let (start, _) =
                    selection_range(text, surface.selection_start(), surface.selection_end());
                if start != 0 {
                    tracing::debug!(
                        target: "numfield::guard",
                        text,
                        caret = start,
                        "rejected '-' away from start of text"
                    );
                    return Verdict::Reject;
                }
                self.check_insert(surface, "-")
            }
            KeyClass::Other => {
                tracing::debug!(target: "numfield::guard", key = %stroke, "rejected key");
                Verdict::Reject
            }
        }
    }

    /// Text a paste would insert: the event's payload, else the injected
    /// clipboard, else nothing
    pub fn paste_text(&self, clipboard_text: Option<&str>) -> String {
        match clipboard_text {
            Some(text) => text.to_string(),
            None => self.clipboard.read_text().unwrap_or_default(),
        }
    }

    /// Paste check for hosts without a pre-mutation hook
    pub fn paste<S: TextSurface + ?Sized>(
        &self,
        surface: &S,
        clipboard_text: Option<&str>,
    ) -> Verdict {
        self.check_insert(surface, &self.paste_text(clipboard_text))
    }

    fn log(&self, verdict: Verdict, text: &str, candidate: &str) {
        match verdict {
            Verdict::Reject => {
                tracing::debug!(target: "numfield::guard", text, candidate, "rejected edit")
            }
            _ => tracing::trace!(target: "numfield::guard", text, candidate, "accepted edit"),
        }
    }
}
