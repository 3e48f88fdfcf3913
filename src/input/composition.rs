//! IME composition tracking.
//!
//! While a composition is active, key events describe pre-edit keystrokes
//! rather than text. The key layer must stay out of the way until the
//! composition is committed.

use winit::event::Ime;

/// Whether an IME composition is in progress, and its pre-edit text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionState {
    preedit: Option<String>,
}

impl CompositionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while pre-edit text is being composed
    pub fn is_composing(&self) -> bool {
        self.preedit.is_some()
    }

    /// The uncommitted pre-edit text
    pub fn preedit(&self) -> Option<&str> {
        self.preedit.as_deref()
    }

    /// Start or update the pre-edit text; an empty pre-edit ends the composition
    pub fn update(&mut self, preedit: &str) {
        self.preedit = (!preedit.is_empty()).then(|| preedit.to_string());
    }

    /// End the composition (commit, cancel or IME disabled)
    pub fn end(&mut self) {
        self.preedit = None;
    }

    /// Track a winit IME event
    pub fn apply(&mut self, ime: &Ime) {
        match ime {
            Ime::Preedit(text, _) => self.update(text),
            Ime::Commit(_) | Ime::Disabled => self.end(),
            Ime::Enabled => {}
        }
    }
}
