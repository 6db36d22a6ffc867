//! Error types shared by every encoding in the crate.

use thiserror::Error;

/// Errors raised by the encoding operations.
///
/// Every failure is reported at the violated precondition and propagates
/// unchanged to the caller; no operation retries or returns a partial
/// result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input contained a character outside the expected alphabet, or a
    /// method name was not recognized.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input had the wrong number of symbols for a fixed-length code.
    #[error("invalid length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// CRC generator polynomial was missing, too short, or non-binary.
    #[error("invalid generator: {0}")]
    InvalidGenerator(String),
}

/// Result type for all operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
