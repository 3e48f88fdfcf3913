//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use numfield::config::NumericConstraints;
use numfield::editable::NumberField;
use numfield::grammar::Matcher;
use numfield::guard::{FixedClipboard, NoClipboard, NumericGuard};
use numfield::input::Keystroke;
use numfield::Verdict;

/// Guard with no clipboard behind it
pub fn test_guard(constraints: NumericConstraints) -> NumericGuard {
    NumericGuard::with_clipboard(constraints, Box::new(NoClipboard)).expect("valid constraints")
}

/// Guard whose clipboard holds `text`
pub fn guard_with_clipboard(constraints: NumericConstraints, text: &str) -> NumericGuard {
    NumericGuard::with_clipboard(constraints, Box::new(FixedClipboard::new(text)))
        .expect("valid constraints")
}

/// Empty field with no clipboard behind it
pub fn test_field(constraints: NumericConstraints) -> NumberField {
    NumberField::with_clipboard(constraints, Box::new(NoClipboard)).expect("valid constraints")
}

pub fn matcher(constraints: NumericConstraints) -> Matcher {
    Matcher::build(&constraints).expect("valid constraints")
}

/// Type each char of `text` as a key press, returning the verdicts
pub fn type_text(field: &mut NumberField, text: &str) -> Vec<Verdict> {
    text.chars()
        .map(|c| field.key_press(&Keystroke::char(c)))
        .collect()
}

/// A spread of constraint sets covering every flag combination
pub fn constraint_grid() -> Vec<NumericConstraints> {
    let mut grid = Vec::new();
    for allow_negative in [true, false] {
        for allow_decimal in [true, false] {
            for (int, frac) in [(0, 0), (1, 0), (0, 2), (3, 1), (6, 2), (6, 6)] {
                grid.push(NumericConstraints {
                    allow_negative,
                    allow_decimal,
                    max_int_digits: int,
                    max_frac_digits: frac,
                });
            }
        }
    }
    grid
}

/// Every string over `alphabet` up to `max_len` chars
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &frontier {
            for &c in alphabet {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}
