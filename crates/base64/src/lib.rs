//! Strict base64 decoding.
//!
//! This crate decodes standard base64 (RFC 4648 alphabet with `+`, `/` and
//! `=` padding) into raw bytes. Decoding is all-or-nothing: malformed input
//! yields a [`DecodeError`] and never a partially decoded buffer.
//!
//! # Example
//!
//! ```
//! use base64_decoder::{decode, DecodeError};
//!
//! assert_eq!(decode("TWFuTWFu").unwrap(), b"ManMan");
//! assert_eq!(
//!     decode("AB#D"),
//!     Err(DecodeError::InvalidSymbol { index: 2, byte: b'#' })
//! );
//! ```

mod block;
mod constants;
mod decode;
mod table;

pub use block::BlockKind;
pub use constants::{ALPHABET, ALPHABET_BYTES, BLOCK_LEN, PAD};
pub use decode::{decode, decode_bin, decoded_len, Decoder};

use thiserror::Error;

/// Error type for base64 decoding.
///
/// `index` fields are byte offsets into the input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input length is not a multiple of 4.
    #[error("Base64 string length must be a multiple of 4, got {length}")]
    InvalidLength { length: usize },
    /// A non-padding byte outside the base64 alphabet.
    #[error("Invalid base64 symbol {byte:#04x} at index {index}")]
    InvalidSymbol { index: usize, byte: u8 },
    /// A `=` outside the last two positions of the final block, or more than two of them.
    #[error("Invalid base64 padding at index {index}")]
    InvalidPadding { index: usize },
}
