// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value model for scale props: a number, or a literal string.

use alloc::string::String;
use core::fmt;

/// A raw value supplied for a scale prop.
///
/// Hosts hand dimension props over either as plain numbers (scaled into
/// `calc()` expressions) or as strings. A string that parses as a finite
/// number (`"4"`, `"2.5"`) participates in scaling just like a number; any
/// other string (`"auto"`, `"10vh"`, `"100%"`) is an escape hatch that is
/// emitted verbatim, bypassing scale and unit entirely.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleValue {
    /// A plain number.
    Number(f64),
    /// A literal string, possibly numeric.
    Literal(String),
}

impl ScaleValue {
    /// The numeric reading of this value, if it has one.
    ///
    /// `Number` values are returned as-is (including NaN); literals are
    /// coerced only when they parse as a finite float.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Literal(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Loose falsiness: zero, NaN, or the empty string.
    ///
    /// Only used when coercing absent-or-falsy default values; resolved
    /// prop values are never filtered through this (a defined `0` scales).
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Literal(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Literal(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ScaleValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for ScaleValue {
    fn from(s: &str) -> Self {
        use alloc::borrow::ToOwned;
        Self::Literal(s.to_owned())
    }
}

impl From<String> for ScaleValue {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ScaleValue;

    #[test]
    fn numbers_read_as_numbers() {
        assert_eq!(ScaleValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(ScaleValue::Number(0.0).as_number(), Some(0.0));
    }

    #[test]
    fn numeric_literals_are_coerced() {
        assert_eq!(ScaleValue::from("4").as_number(), Some(4.0));
        assert_eq!(ScaleValue::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(ScaleValue::from("1e3").as_number(), Some(1000.0));
    }

    #[test]
    fn non_numeric_literals_are_not_coerced() {
        assert_eq!(ScaleValue::from("auto").as_number(), None);
        assert_eq!(ScaleValue::from("10vh").as_number(), None);
        assert_eq!(ScaleValue::from("").as_number(), None);
        // Non-finite readings do not count as numeric.
        assert_eq!(ScaleValue::from("inf").as_number(), None);
    }

    #[test]
    fn falsiness_matches_loose_truthiness() {
        assert!(ScaleValue::Number(0.0).is_falsy());
        assert!(ScaleValue::Number(f64::NAN).is_falsy());
        assert!(ScaleValue::from("").is_falsy());
        assert!(!ScaleValue::Number(0.1).is_falsy());
        assert!(!ScaleValue::from("0").is_falsy());
        assert!(!ScaleValue::from("auto").is_falsy());
    }

    #[test]
    fn display_drops_trailing_zeroes() {
        assert_eq!(ScaleValue::Number(2.0).to_string(), "2");
        assert_eq!(ScaleValue::Number(1.5).to_string(), "1.5");
        assert_eq!(ScaleValue::from("auto").to_string(), "auto");
    }
}
