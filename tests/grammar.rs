//! Grammar builder properties
//!
//! Checked exhaustively over short strings of the relevant alphabet for
//! every constraint combination in the grid.

mod common;

use common::{all_strings, constraint_grid, matcher};
use numfield::config::NumericConstraints;
use numfield::grammar::Matcher;

const ALPHABET: [char; 5] = ['-', '.', '0', '7', 'a'];

/// Integer and fraction digit counts of an accepted string
fn digit_counts(s: &str) -> (usize, usize) {
    let body = s.strip_prefix('-').unwrap_or(s);
    match body.split_once('.') {
        Some((int, frac)) => (int.len(), frac.len()),
        None => (body.len(), 0),
    }
}

#[test]
fn test_empty_always_accepted() {
    for c in constraint_grid() {
        assert!(matcher(c).accepts(""), "{:?}", c);
    }
}

#[test]
fn test_no_negative_rejects_minus() {
    for c in constraint_grid().into_iter().filter(|c| !c.allow_negative) {
        let m = matcher(c);
        for s in all_strings(&ALPHABET, 4) {
            if s.contains('-') {
                assert!(!m.accepts(&s), "{:?} accepted {:?}", c, s);
            }
        }
    }
}

#[test]
fn test_no_decimal_rejects_point() {
    for c in constraint_grid().into_iter().filter(|c| !c.allow_decimal) {
        let m = matcher(c);
        for s in all_strings(&ALPHABET, 4) {
            if s.contains('.') {
                assert!(!m.accepts(&s), "{:?} accepted {:?}", c, s);
            }
        }
    }
}

#[test]
fn test_digit_bounds() {
    for c in constraint_grid() {
        let m = matcher(c);
        for s in all_strings(&ALPHABET, 5) {
            if !m.accepts(&s) {
                continue;
            }
            let (int, frac) = digit_counts(&s);
            assert!(int <= c.max_int_digits as usize, "{:?} accepted {:?}", c, s);
            assert!(frac <= c.max_frac_digits as usize, "{:?} accepted {:?}", c, s);
            assert!(!s.contains('a'));
        }
    }
}

#[test]
fn test_accepted_strings_are_reachable_by_appending() {
    // Every accepted string has an accepted proper prefix, so it can be
    // typed left to right one char at a time starting from ""
    for c in constraint_grid() {
        let m = matcher(c);
        for s in all_strings(&ALPHABET, 5) {
            if s.is_empty() || !m.accepts(&s) {
                continue;
            }
            let prefix: String = s.chars().take(s.chars().count() - 1).collect();
            assert!(
                m.accepts(&prefix),
                "{:?}: {:?} accepted but prefix {:?} is not",
                c,
                s,
                prefix
            );
        }
    }
}

#[test]
fn test_identical_constraints_behave_identically() {
    let c = NumericConstraints::default();
    let a = Matcher::build(&c).unwrap();
    let b = Matcher::build(&c).unwrap();
    for s in all_strings(&ALPHABET, 4) {
        assert_eq!(a.accepts(&s), b.accepts(&s), "{:?}", s);
    }
}

#[test]
fn test_decimal_entry_forms() {
    let m = matcher(NumericConstraints::grammar_defaults());
    for s in ["123456", "123456.123456", ".5", "-.5", "-", ".", "0.", "-0.000001"] {
        assert!(m.accepts(s), "{:?}", s);
    }
    for s in ["1234567", "1.1234567", "..", "-1-", "1e5", "+1", " 1", "1,5"] {
        assert!(!m.accepts(s), "{:?}", s);
    }
}

#[test]
fn test_integer_only_degenerate() {
    let m = matcher(NumericConstraints::integer(0));
    assert!(m.accepts(""));
    assert!(m.accepts("-"));
    assert!(!m.accepts("0"));
    assert!(!m.accepts("-0"));

    let m = matcher(NumericConstraints::integer(0).with_negative(false));
    assert!(m.accepts(""));
    assert!(!m.accepts("-"));
}

#[test]
fn test_pattern_is_exposed() {
    let m = matcher(NumericConstraints::integer(3).with_negative(false));
    assert!(m.pattern().contains("{0,3}"));
    assert!(!m.pattern().contains("-?"));
}
