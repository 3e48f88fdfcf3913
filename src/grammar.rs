//! Grammar builder for numeric field text.
//!
//! A [`Matcher`] recognizes every text a numeric field may hold *while the
//! user is still typing*: the empty string, a lone sign, a trailing decimal
//! point and so on. The guard evaluates it after every single keystroke, so
//! intermediate states must be accepted or the field becomes unusable.
//!
//! ```text
//! sign  := "-"?                                 (only if allow_negative)
//! body  := [0-9]{0,I} ("." [0-9]{0,F})?        (decimal)
//!        | "." [0-9]{0,F}
//!        | [0-9]{0,I}                           (integer only)
//! text  := sign body?
//! ```

use regex::Regex;

use crate::config::NumericConstraints;

/// Largest supported digit limit for either part of the number
pub const MAX_DIGITS: u32 = 1000;

/// Anchored matcher for partial or final numeric entries.
///
/// Stateless and read-only; rebuilt (never mutated) when the constraints change.
#[derive(Debug, Clone)]
pub struct Matcher {
    constraints: NumericConstraints,
    regex: Regex,
}

impl Matcher {
    /// Build the matcher for a constraint set
    pub fn build(constraints: &NumericConstraints) -> Result<Self, GrammarError> {
        for (field, value) in [
            ("max_int_digits", constraints.max_int_digits),
            ("max_frac_digits", constraints.max_frac_digits),
        ] {
            if value > MAX_DIGITS {
                return Err(GrammarError::DigitLimit { field, value });
            }
        }

        let pattern = build_pattern(constraints);
        let regex = Regex::new(&pattern).map_err(|e| GrammarError::Pattern(e.to_string()))?;
        tracing::debug!(%pattern, ?constraints, "built numeric matcher");

        Ok(Self {
            constraints: *constraints,
            regex,
        })
    }

    /// True if `text` is a valid partial or final entry
    #[inline]
    pub fn accepts(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// True if `text` is accepted and is a finished number: at least one
    /// digit and no dangling decimal point
    pub fn is_complete(&self, text: &str) -> bool {
        self.accepts(text) && text.bytes().any(|b| b.is_ascii_digit()) && !text.ends_with('.')
    }

    /// Source of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Constraints this matcher was built from
    pub fn constraints(&self) -> &NumericConstraints {
        &self.constraints
    }
}

fn build_pattern(c: &NumericConstraints) -> String {
    let sign = if c.allow_negative { "-?" } else { "" };
    let int = c.max_int_digits;
    let frac = c.max_frac_digits;

    if c.allow_decimal {
        format!(
            r"\A{sign}(?:[0-9]{{0,{int}}}(?:\.[0-9]{{0,{frac}}})?|\.[0-9]{{0,{frac}}})?\z"
        )
    } else {
        format!(r"\A{sign}[0-9]{{0,{int}}}\z")
    }
}

/// Errors from building a matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A digit limit above [`MAX_DIGITS`]
    DigitLimit { field: &'static str, value: u32 },
    /// The generated pattern failed to compile
    Pattern(String),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::DigitLimit { field, value } => write!(
                f,
                "{} = {} exceeds the supported limit of {}",
                field, value, MAX_DIGITS
            ),
            GrammarError::Pattern(e) => write!(f, "Pattern error: {}", e),
        }
    }
}

impl std::error::Error for GrammarError {}
