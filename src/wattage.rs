// src/wattage.rs
//! Wattage extraction from free-text fields such as `150W` or `75VA`.

use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;
use thiserror::Error;

const LEADING_DIGITS_PATTERN: &str = r"^[0-9]+";

static LEADING_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LEADING_DIGITS_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WattageError {
    #[error("no leading digits in {0:?}")]
    NoLeadingDigits(String),

    #[error("cannot convert {digits:?} to an integer: {source}")]
    OutOfRange {
        digits: String,
        source: ParseIntError,
    },
}

/// Parses the run of ASCII digits at the start of `text`.
///
/// Anything after the digits is ignored, so `"0.00VA"` yields `0`.
///
/// # Errors
/// Returns `NoLeadingDigits` if `text` does not start with a digit and
/// `OutOfRange` if the digit run overflows a `u64`.
pub fn extract_wattage(text: &str) -> Result<u64, WattageError> {
    let digits = LEADING_DIGITS_RE
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| WattageError::NoLeadingDigits(text.to_string()))?;

    digits.parse().map_err(|source| WattageError::OutOfRange {
        digits: digits.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_unit_ignored() {
        assert_eq!(extract_wattage("150W"), Ok(150));
        assert_eq!(extract_wattage("75VA"), Ok(75));
        assert_eq!(extract_wattage("42"), Ok(42));
    }

    #[test]
    fn test_stops_at_decimal_point() {
        assert_eq!(extract_wattage("0.00VA"), Ok(0));
        assert_eq!(extract_wattage("12.5 W"), Ok(12));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(extract_wattage("007W"), Ok(7));
    }

    #[test]
    fn test_no_leading_digit() {
        assert!(matches!(
            extract_wattage("VA150"),
            Err(WattageError::NoLeadingDigits(t)) if t == "VA150"
        ));
        assert!(matches!(
            extract_wattage("N/A"),
            Err(WattageError::NoLeadingDigits(_))
        ));
        assert!(matches!(
            extract_wattage(" 150W"),
            Err(WattageError::NoLeadingDigits(_))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            extract_wattage(""),
            Err(WattageError::NoLeadingDigits(_))
        ));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are Unicode \d but not wattage digits.
        assert!(matches!(
            extract_wattage("\u{0661}\u{0662}W"),
            Err(WattageError::NoLeadingDigits(_))
        ));
    }

    #[test]
    fn test_overflow() {
        let err = extract_wattage("99999999999999999999999W").unwrap_err();
        assert!(matches!(err, WattageError::OutOfRange { ref digits, .. } if digits == "99999999999999999999999"));
    }
}
