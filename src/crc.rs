//! CRC (Cyclic Redundancy Check) remainder computation.
//!
//! CRC calculations treat data as a binary polynomial and perform modulo-2
//! division by a generator polynomial, using the remainder as the check
//! value. Unlike the table-driven byte-wise variants used in wire formats,
//! this implementation works directly on textual bit strings with an
//! arbitrary caller-supplied generator, which makes the division itself
//! visible: the message is extended by `g-1` zero bits and reduced in place,
//! one bit position at a time, with XOR standing in for subtraction over
//! GF(2).
//!
//! This implementation provides:
//! - Remainder computation for any generator of length ≥ 2
//! - Receiver-side verification (all-zero remainder check)
//! - Named constructors for common textbook generators
//!
//! # Examples
//!
//! ```
//! use edc::crc::Crc;
//!
//! let crc = Crc::new("10011").unwrap();
//! let remainder = crc.remainder("1101011011").unwrap();
//! assert_eq!(remainder, "1110");
//! assert!(crc.verify("11010110111110").unwrap());
//! ```

use crate::bits;
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// A CRC computation fixed to one generator polynomial.
///
/// The generator is validated once at construction; the remainder width is
/// always one less than the generator length.
#[derive(Debug, Clone)]
pub struct Crc {
    /// Generator polynomial, most significant bit first
    generator: BitVec<u8, Msb0>,
}

impl Crc {
    /// Creates a CRC computation from a textual generator polynomial.
    ///
    /// # Arguments
    ///
    /// * `generator` - Bit string of length ≥ 2, most significant bit first
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenerator`] if the generator is empty,
    /// shorter than 2 bits, or contains non-binary characters.
    pub fn new(generator: &str) -> Result<Self> {
        let generator = bits::parse_bits(generator).map_err(|_| {
            Error::InvalidGenerator(format!(
                "generator must contain only '0' and '1', got {:?}",
                generator
            ))
        })?;
        if generator.len() < 2 {
            return Err(Error::InvalidGenerator(format!(
                "generator must be at least 2 bits, got {}",
                generator.len()
            )));
        }
        Ok(Crc { generator })
    }

    /// Creates a CRC using the CRC-4-ITU generator x^4 + x + 1 (`10011`).
    pub fn new_itu4() -> Self {
        // Statically valid, construction cannot fail
        Self::new("10011").unwrap()
    }

    /// Creates a CRC using the CRC-8-CCITT generator x^8 + x^2 + x + 1
    /// (`100000111`), as used in ATM HEC and SMBus.
    pub fn new_ccitt8() -> Self {
        Self::new("100000111").unwrap()
    }

    /// Number of check bits produced, one less than the generator length.
    pub fn check_bits(&self) -> usize {
        self.generator.len() - 1
    }

    /// Computes the CRC remainder of a bit string.
    ///
    /// The data is extended by `g-1` zero bits and reduced by XOR long
    /// division: wherever the leading bit of the current window is set, the
    /// generator is XORed in place, then the window advances one position
    /// regardless. The final `g-1` bits of the reduced buffer are the
    /// remainder. Total buffer length is fixed at
    /// `data.len() + generator.len() - 1`; the division only ever clears
    /// leading bits.
    ///
    /// Empty data yields an all-zero remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data` contains characters other
    /// than `0` or `1`.
    pub fn remainder(&self, data: &str) -> Result<String> {
        let mut dividend = bits::parse_bits(data)?;
        let msg_len = dividend.len();
        dividend.resize(msg_len + self.check_bits(), false);

        // One full generator window starts at each original message position
        for i in 0..msg_len {
            if dividend[i] {
                self.xor_window(&mut dividend, i);
            }
        }

        Ok(bits::render_bits(&dividend[msg_len..]))
    }

    /// Checks a received codeword (data with its remainder appended).
    ///
    /// Divides the codeword as-is and reports whether the remainder is all
    /// zeros, the standard receiver-side CRC check. A codeword shorter than
    /// the generator is accepted only if it contains no set bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `codeword` contains characters
    /// other than `0` or `1`.
    pub fn verify(&self, codeword: &str) -> Result<bool> {
        let mut buf = bits::parse_bits(codeword)?;
        let windows = (buf.len() + 1).saturating_sub(self.generator.len());
        for i in 0..windows {
            if buf[i] {
                self.xor_window(&mut buf, i);
            }
        }
        Ok(buf.not_any())
    }

    /// XORs the generator into `buf` at the window starting at `i`,
    /// clearing the leading bit.
    fn xor_window(&self, buf: &mut BitVec<u8, Msb0>, i: usize) {
        for (j, g) in self.generator.iter().enumerate() {
            let bit = buf[i + j] ^ *g;
            buf.set(i + j, bit);
        }
    }
}

impl Display for Crc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CRC-{} (generator: {})",
            self.check_bits(),
            bits::render_bits(&self.generator)
        )
    }
}

/// Computes the CRC remainder of `data` for a one-off generator.
pub fn crc_remainder(data: &str, generator: &str) -> Result<String> {
    Crc::new(generator)?.remainder(data)
}
