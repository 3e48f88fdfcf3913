//! Keyboard and IME input at the windowing boundary
//!
//! ```text
//! winit KeyEvent ─→ Keystroke ─→ KeyClass        (discrete key layer)
//! winit Ime      ─→ CompositionState ─→ EditEvent (pre-mutation layer)
//! ```

mod composition;
mod keys;
mod types;
mod winit_adapter;

pub use composition::CompositionState;
pub use keys::{KeyClass, Shortcut};
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::{edit_event_from_ime, keystroke_from_winit};
