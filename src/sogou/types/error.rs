//! Custom error types for the sogou-dict-reader crate.

use thiserror::Error;

use super::models::MAGIC;

/// The fatal error type for all operations in this crate.
///
/// Only whole-file problems are represented here. A single malformed record
/// never produces an error; the decoder skips it.
#[derive(Debug, Error)]
pub enum SogouError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The buffer cannot hold the fixed header.
    #[error("File too small to be a Sogou dictionary: {len} bytes (minimum {min})", min = super::models::MIN_FILE_SIZE)]
    TooSmall { len: usize },

    /// The first four bytes are not the `SGPU` signature.
    #[error("Invalid file signature: found {found:02x?}, expected {expected:02x?}", expected = MAGIC)]
    BadSignature { found: [u8; 4] },
}

/// A convenience `Result` type alias using the crate's `SogouError` type.
pub type Result<T> = std::result::Result<T, SogouError>;
