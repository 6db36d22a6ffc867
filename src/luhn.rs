//! Luhn checksum validation.
//!
//! The Luhn algorithm is the checksum behind most payment card numbers,
//! IMEIs and similar identifiers. Scanning from the rightmost digit, every
//! second digit is doubled (subtracting 9 when the double exceeds 9) and
//! the transformed digits are summed; the number validates when the total
//! is a multiple of 10.
//!
//! Unlike the other encodings in this crate, Luhn does not produce a
//! derived value: it judges the input, returning a [`LuhnStatus`]
//! classification.

use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Outcome of a Luhn check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuhnStatus {
    /// The digit sum is a multiple of 10
    Valid,
    /// The digit sum is not a multiple of 10
    Invalid,
}

impl LuhnStatus {
    /// Returns `true` for [`LuhnStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, LuhnStatus::Valid)
    }
}

impl Display for LuhnStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LuhnStatus::Valid => write!(f, "Valid"),
            LuhnStatus::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Validates a digit string against the Luhn algorithm.
///
/// The empty string sums to 0 and therefore classifies as `Valid`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `data` contains characters other
/// than decimal digits.
///
/// # Examples
///
/// ```
/// use edc::luhn::{validate, LuhnStatus};
///
/// assert_eq!(validate("79927398713").unwrap(), LuhnStatus::Valid);
/// assert_eq!(validate("79927398710").unwrap(), LuhnStatus::Invalid);
/// ```
pub fn validate(data: &str) -> Result<LuhnStatus> {
    let mut sum = 0u32;
    let mut double = false;

    for (i, ch) in data.chars().rev().enumerate() {
        let mut digit = ch.to_digit(10).ok_or_else(|| {
            Error::InvalidInput(format!(
                "expected a decimal digit at position {}, got {:?}",
                data.chars().count() - 1 - i,
                ch
            ))
        })?;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    Ok(if sum % 10 == 0 {
        LuhnStatus::Valid
    } else {
        LuhnStatus::Invalid
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_number() {
        assert_eq!(validate("79927398713").unwrap(), LuhnStatus::Valid);
        assert_eq!(validate("79927398710").unwrap(), LuhnStatus::Invalid);
    }

    #[test]
    fn test_all_final_digits() {
        // Exactly one check digit completes the prefix
        for last in 0..10 {
            let number = format!("7992739871{}", last);
            let expected = if last == 3 {
                LuhnStatus::Valid
            } else {
                LuhnStatus::Invalid
            };
            assert_eq!(validate(&number).unwrap(), expected);
        }
    }

    #[test]
    fn test_card_number_vectors() {
        // Standard test card numbers
        assert!(validate("4539148803436467").unwrap().is_valid());
        assert!(validate("4111111111111111").unwrap().is_valid());
        assert!(!validate("4111111111111112").unwrap().is_valid());
    }

    #[test]
    fn test_short_inputs() {
        // A single digit is its own sum
        assert_eq!(validate("0").unwrap(), LuhnStatus::Valid);
        assert_eq!(validate("5").unwrap(), LuhnStatus::Invalid);
        // "18": 8 + (1*2) = 10
        assert_eq!(validate("18").unwrap(), LuhnStatus::Valid);
    }

    #[test]
    fn test_empty_sums_to_zero() {
        assert_eq!(validate("").unwrap(), LuhnStatus::Valid);
    }

    #[test]
    fn test_doubling_transform() {
        // "59": 9 + (5*2 - 9) = 10
        assert_eq!(validate("59").unwrap(), LuhnStatus::Valid);
    }

    #[test]
    fn test_rejects_non_digits() {
        let err = validate("7992a398713").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(validate("4111-1111").is_err());
        assert!(validate(" 79927398713").is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LuhnStatus::Valid.to_string(), "Valid");
        assert_eq!(LuhnStatus::Invalid.to_string(), "Invalid");
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            validate("79927398713").unwrap(),
            validate("79927398713").unwrap()
        );
    }
}
