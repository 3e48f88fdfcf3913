//! numfield - guarded numeric text input
//!
//! Keeps a text field's content inside a constrained numeric grammar
//! (optional sign, bounded integer digits, optional bounded fraction) by
//! judging every keystroke, IME commit, paste and drop before it lands.
//!
//! - [`grammar`]: builds the [`Matcher`] for a [`NumericConstraints`] set
//! - [`guard`]: the [`NumericGuard`] event checks
//! - [`input`]: key classification and the winit adapter
//! - [`editable`]: [`NumberField`], a text buffer with the guard wired in

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod grammar;
pub mod guard;
pub mod input;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::NumericConstraints;
pub use editable::NumberField;
pub use grammar::Matcher;
pub use guard::{Channel, EditEvent, NumericGuard, Verdict};
