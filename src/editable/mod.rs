//! Editable numeric field: buffer, selection and the guarded field itself.
//!
//! # Example
//!
//! ```ignore
//! use numfield::editable::NumberField;
//! use numfield::config::NumericConstraints;
//! use numfield::input::Keystroke;
//!
//! let mut field = NumberField::new(NumericConstraints::default())?;
//! for c in "-12.555".chars() {
//!     field.key_press(&Keystroke::char(c));
//! }
//! assert_eq!(field.text(), "-12.55");
//! ```

mod buffer;
mod field;
mod selection;

pub use buffer::StringBuffer;
pub use field::{format_value, parse_display, InputMode, NumberField};
pub use selection::Selection;
