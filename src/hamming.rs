//! (7,4) Hamming encoder.
//!
//! The (7,4) Hamming code encodes 4 data bits into 7 bits by adding 3
//! parity bits, enough redundancy to detect and correct any single-bit
//! error. Each parity bit covers a distinct subset of the data bits:
//!
//! ```text
//! p1 = d0 ^ d1 ^ d3
//! p2 = d0 ^ d2 ^ d3
//! p3 = d1 ^ d2 ^ d3
//! ```
//!
//! and the codeword interleaves parity and data as `p1 p2 d0 p3 d1 d2 d3`,
//! placing the parity bits at positions 1, 2 and 4 as in the standard
//! construction.

use crate::bits;
use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Number of data bits per codeword.
pub const DATA_BITS: usize = 4;

/// Number of bits in an encoded codeword.
pub const CODE_BITS: usize = 7;

/// Encodes exactly 4 data bits into a 7-bit Hamming codeword.
///
/// The length gate is a hard precondition: it runs on the raw input before
/// any parsing, and a wrong-length input fails with
/// [`Error::InvalidLength`] without any computation.
///
/// # Errors
///
/// * [`Error::InvalidLength`] if the input is not exactly 4 characters
/// * [`Error::InvalidInput`] if a character is neither `0` nor `1`
///
/// # Examples
///
/// ```
/// use edc::hamming::encode;
///
/// assert_eq!(encode("1011").unwrap(), "0110011");
/// assert!(encode("101").is_err());
/// ```
pub fn encode(data: &str) -> Result<String> {
    let len = data.chars().count();
    if len != DATA_BITS {
        return Err(Error::InvalidLength {
            expected: DATA_BITS,
            actual: len,
        });
    }
    let data = bits::parse_bits(data)?;

    let (d0, d1, d2, d3) = (data[0], data[1], data[2], data[3]);
    let p1 = d0 ^ d1 ^ d3;
    let p2 = d0 ^ d2 ^ d3;
    let p3 = d1 ^ d2 ^ d3;

    let mut codeword = bitvec![u8, Msb0; 0; CODE_BITS];
    codeword.set(0, p1);
    codeword.set(1, p2);
    codeword.set(2, d0);
    codeword.set(3, p3);
    codeword.set(4, d1);
    codeword.set(5, d2);
    codeword.set(6, d3);

    Ok(bits::render_bits(&codeword))
}

/// Checks that a 7-bit codeword satisfies all three parity equations.
///
/// Recomputes each parity bit from the data positions of the codeword and
/// compares it against the stored one. A clean codeword passes; any
/// single-bit flip violates at least one equation.
///
/// # Errors
///
/// * [`Error::InvalidLength`] if the input is not exactly 7 characters
/// * [`Error::InvalidInput`] if a character is neither `0` nor `1`
pub fn verify(codeword: &str) -> Result<bool> {
    let len = codeword.chars().count();
    if len != CODE_BITS {
        return Err(Error::InvalidLength {
            expected: CODE_BITS,
            actual: len,
        });
    }
    let cw = bits::parse_bits(codeword)?;

    let (p1, p2, d0, p3, d1, d2, d3) = (cw[0], cw[1], cw[2], cw[3], cw[4], cw[5], cw[6]);
    Ok(p1 == (d0 ^ d1 ^ d3) && p2 == (d0 ^ d2 ^ d3) && p3 == (d1 ^ d2 ^ d3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codeword() {
        assert_eq!(encode("1011").unwrap(), "0110011");
        assert_eq!(encode("0000").unwrap(), "0000000");
        assert_eq!(encode("1111").unwrap(), "1111111");
        assert_eq!(encode("1000").unwrap(), "1110000");
    }

    #[test]
    fn test_codeword_satisfies_parity_equations() {
        // Every 4-bit input must produce a self-consistent codeword
        for value in 0u8..16 {
            let data = format!("{:04b}", value);
            let codeword = encode(&data).unwrap();
            assert_eq!(codeword.len(), CODE_BITS);
            assert!(verify(&codeword).unwrap());
        }
    }

    #[test]
    fn test_single_bit_error_violates_parity() {
        let codeword = encode("1011").unwrap();
        for i in 0..CODE_BITS {
            let mut corrupted: Vec<char> = codeword.chars().collect();
            corrupted[i] = if corrupted[i] == '0' { '1' } else { '0' };
            let corrupted: String = corrupted.into_iter().collect();
            assert!(!verify(&corrupted).unwrap());
        }
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            encode("101").unwrap_err(),
            Error::InvalidLength {
                expected: 4,
                actual: 3
            }
        );
        assert!(matches!(
            encode("10111"),
            Err(Error::InvalidLength { .. })
        ));
        assert!(matches!(encode(""), Err(Error::InvalidLength { .. })));

        // The length gate runs before parsing, so a short malformed input
        // reports its length
        assert!(matches!(
            encode("1x1"),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_non_binary_is_rejected() {
        assert!(matches!(encode("1x11"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_determinism() {
        assert_eq!(encode("0110").unwrap(), encode("0110").unwrap());
    }
}
