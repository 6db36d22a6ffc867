//! Method-name dispatch over the five encodings.
//!
//! Callers that select an operation by name (a CLI flag, a form field, an
//! RPC parameter) go through [`Method`] and [`compute`]: one synchronous
//! call per selection, every result rendered as a string, every failure a
//! crate [`Error`](crate::Error).

use crate::error::{Error, Result};
use crate::{checksum, crc, hamming, luhn, parity};
use log::debug;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The five supported encodings, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// CRC remainder for a caller-supplied generator
    Crc,
    /// Additive 8-bit checksum
    Checksum,
    /// Even-parity bit
    Parity,
    /// (7,4) Hamming encoder
    Hamming,
    /// Luhn validation
    Luhn,
}

impl Method {
    /// All methods, in display order.
    pub const ALL: [Method; 5] = [
        Method::Crc,
        Method::Checksum,
        Method::Parity,
        Method::Hamming,
        Method::Luhn,
    ];

    /// The lower-case name this method dispatches under.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Crc => "crc",
            Method::Checksum => "checksum",
            Method::Parity => "parity",
            Method::Hamming => "hamming",
            Method::Luhn => "luhn",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "crc" => Ok(Method::Crc),
            "checksum" => Ok(Method::Checksum),
            "parity" => Ok(Method::Parity),
            "hamming" => Ok(Method::Hamming),
            "luhn" => Ok(Method::Luhn),
            other => Err(Error::InvalidInput(format!(
                "unknown method {:?}",
                other
            ))),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runs one encoding over `data` and renders the result as a string.
///
/// `generator` is consulted only by [`Method::Crc`] and is required there;
/// the other methods ignore it. Luhn renders its classification as
/// `"Valid"` or `"Invalid"`.
///
/// # Errors
///
/// * [`Error::InvalidGenerator`] for CRC without a generator, or with a
///   malformed one
/// * otherwise, whatever the selected operation raises
///
/// # Examples
///
/// ```
/// use edc::method::{compute, Method};
///
/// let remainder = compute(Method::Crc, "1101011011", Some("10011")).unwrap();
/// assert_eq!(remainder, "1110");
///
/// let status = compute(Method::Luhn, "79927398713", None).unwrap();
/// assert_eq!(status, "Valid");
/// ```
pub fn compute(method: Method, data: &str, generator: Option<&str>) -> Result<String> {
    debug!(
        "computing {} over {} input symbols",
        method,
        data.chars().count()
    );
    match method {
        Method::Crc => {
            let generator = generator.ok_or_else(|| {
                Error::InvalidGenerator("a generator is required for CRC".to_string())
            })?;
            crc::Crc::new(generator)?.remainder(data)
        }
        Method::Checksum => checksum::checksum(data),
        Method::Parity => Ok(parity::parity_bit(data)?.to_string()),
        Method::Hamming => hamming::encode(data),
        Method::Luhn => Ok(luhn::validate(data)?.to_string()),
    }
}
