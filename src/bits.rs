//! Bit-string parsing and rendering.
//!
//! All bit-string encodings share one validated entry point: a textual
//! string of `0`/`1` characters is parsed into a [`BitVec`] before any
//! arithmetic happens, so a stray character fails the call instead of
//! being silently mis-parsed downstream.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Parses a textual bit string into a bit buffer.
///
/// The empty string parses to an empty buffer; length is otherwise
/// unrestricted and preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for any character other than `0` or `1`.
///
/// # Examples
///
/// ```
/// use edc::bits::parse_bits;
///
/// let bits = parse_bits("1011").unwrap();
/// assert_eq!(bits.len(), 4);
/// assert!(parse_bits("10x1").is_err());
/// ```
pub fn parse_bits(s: &str) -> Result<BitVec<u8, Msb0>> {
    let mut bits = BitVec::with_capacity(s.len());
    for (i, ch) in s.chars().enumerate() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "expected '0' or '1' at position {}, got {:?}",
                    i, ch
                )))
            }
        }
    }
    Ok(bits)
}

/// Renders a bit slice back to its textual form.
pub fn render_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
