//! Additive 8-bit checksum.
//!
//! The message is split into consecutive 8-bit groups, each read as an
//! unsigned big-endian value; the values are summed modulo 256 and the sum
//! is rendered as an 8-bit zero-padded bit string. A trailing group of
//! fewer than 8 bits is read as a value of its own shorter width rather
//! than being padded or rejected, so `"0000000111"` contributes the bytes
//! `00000001` (1) and `11` (3).

use crate::bits;
use crate::error::Result;

/// Width of one checksum group, and of the rendered result.
const BYTE_BITS: usize = 8;

/// Computes the additive checksum of a bit string as an integer in
/// `[0, 255]`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `data`
/// contains characters other than `0` or `1`.
pub fn checksum_value(data: &str) -> Result<u8> {
    let data = bits::parse_bits(data)?;
    let mut sum = 0u32;
    for group in data.chunks(BYTE_BITS) {
        let value = group.iter().fold(0u32, |acc, bit| (acc << 1) | *bit as u32);
        sum = (sum + value) % 256;
    }
    Ok(sum as u8)
}

/// Computes the additive checksum of a bit string, rendered as an 8-bit
/// zero-padded bit string.
///
/// The checksum of the empty string is `"00000000"`.
///
/// # Examples
///
/// ```
/// use edc::checksum::checksum;
///
/// assert_eq!(checksum("0000000100000010").unwrap(), "00000011");
/// assert_eq!(checksum("").unwrap(), "00000000");
/// ```
pub fn checksum(data: &str) -> Result<String> {
    Ok(format!("{:08b}", checksum_value(data)?))
}
