//! Tolerant numeric parsing for spreadsheet cells.
//!
//! Exports routinely carry blank cells or placeholders such as `N/A` where a
//! number is expected. Coercion never fails: anything that does not parse
//! becomes zero. The tagged [`Coerced`] form keeps track of whether a value
//! was read or substituted so callers can log the substitution.

use std::fmt;

/// Why a cell was replaced with the default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    /// The cell was empty or whitespace only.
    Blank,
    /// The cell held text that is not a number.
    Unparsable(String),
    /// The cell parsed to NaN or an infinity, which JSON cannot represent.
    NonFinite(String),
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultReason::Blank => write!(f, "blank"),
            DefaultReason::Unparsable(text) => write!(f, "unparsable '{text}'"),
            DefaultReason::NonFinite(text) => write!(f, "non-finite '{text}'"),
        }
    }
}

/// Outcome of coercing a cell into a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<T> {
    Parsed(T),
    Defaulted { value: T, reason: DefaultReason },
}

impl<T: Copy> Coerced<T> {
    /// Flattens the outcome into the plain number written to the output.
    pub fn value(&self) -> T {
        match self {
            Coerced::Parsed(value) | Coerced::Defaulted { value, .. } => *value,
        }
    }

    /// Returns the substitution reason, if the value was defaulted.
    pub fn reason(&self) -> Option<&DefaultReason> {
        match self {
            Coerced::Parsed(_) => None,
            Coerced::Defaulted { reason, .. } => Some(reason),
        }
    }
}

/// Parses `text` as a float after dropping thousands separators.
pub fn coerce_float(text: &str) -> Coerced<f64> {
    let cleaned: String = text.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return Coerced::Defaulted {
            value: 0.0,
            reason: DefaultReason::Blank,
        };
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Coerced::Parsed(value),
        Ok(_) => Coerced::Defaulted {
            value: 0.0,
            reason: DefaultReason::NonFinite(text.to_string()),
        },
        Err(_) => Coerced::Defaulted {
            value: 0.0,
            reason: DefaultReason::Unparsable(text.to_string()),
        },
    }
}

/// Parses `text` through a float and truncates toward zero, so `"12.0"` and
/// `"12.7"` both yield `12`.
pub fn coerce_int(text: &str) -> Coerced<i64> {
    match coerce_float(text) {
        Coerced::Parsed(value) => Coerced::Parsed(value.trunc() as i64),
        Coerced::Defaulted { reason, .. } => Coerced::Defaulted { value: 0, reason },
    }
}

/// Float coercion flattened to a plain value; `0.0` on failure.
pub fn safe_float(text: &str) -> f64 {
    coerce_float(text).value()
}

/// Integer coercion flattened to a plain value; `0` on failure.
pub fn safe_int(text: &str) -> i64 {
    coerce_int(text).value()
}
