//! Standard base64 decoding entry points.

use crate::block::{decode_block, trailing_padding, BlockKind};
use crate::constants::{BLOCK_BYTES, BLOCK_LEN};
use crate::DecodeError;

fn check_length(length: usize) -> Result<(), DecodeError> {
    if !length.is_multiple_of(BLOCK_LEN) {
        return Err(DecodeError::InvalidLength { length });
    }
    Ok(())
}

/// Decodes a standard base64 string.
///
/// The input must use the RFC 4648 alphabet, have a length that is a
/// multiple of 4, and may end in one or two `=` characters. The empty string
/// decodes to an empty vector.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the length is not a multiple of 4.
/// - [`DecodeError::InvalidSymbol`] for a character outside the alphabet.
/// - [`DecodeError::InvalidPadding`] for a misplaced `=`.
///
/// No output is produced on error.
///
/// # Example
///
/// ```
/// use base64_decoder::{decode, DecodeError};
///
/// assert_eq!(decode("TWFu").unwrap(), b"Man");
/// assert_eq!(decode("TWE=").unwrap(), b"Ma");
/// assert_eq!(decode("TQ==").unwrap(), b"M");
/// assert_eq!(decode("ABCDE"), Err(DecodeError::InvalidLength { length: 5 }));
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode_bin(input.as_bytes())
}

/// Decodes base64 from a byte slice.
///
/// Same rules as [`decode`]; bytes outside ASCII are reported as
/// [`DecodeError::InvalidSymbol`].
///
/// # Example
///
/// ```
/// use base64_decoder::decode_bin;
///
/// assert_eq!(decode_bin(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode_bin(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_blocks(input).inspect_err(|err| {
        tracing::trace!(
            target: "base64_decoder",
            input_len = input.len(),
            %err,
            "rejected base64 input"
        );
    })
}

fn decode_blocks(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    check_length(input.len())?;

    let blocks = input.len() / BLOCK_LEN;
    let mut out = Vec::with_capacity(blocks * BLOCK_BYTES);
    for (n, block) in input.chunks_exact(BLOCK_LEN).enumerate() {
        let is_final = n + 1 == blocks;
        decode_block(block, n * BLOCK_LEN, is_final, &mut out)?;
    }
    Ok(out)
}

/// Returns the number of bytes `input` decodes to.
///
/// Only the length and the trailing padding are checked; symbols are not
/// validated, so [`decode`] may still reject the input.
///
/// # Errors
///
/// [`DecodeError::InvalidLength`] if the length is not a multiple of 4, or
/// [`DecodeError::InvalidPadding`] if the input ends in more than two `=`.
///
/// # Example
///
/// ```
/// use base64_decoder::decoded_len;
///
/// assert_eq!(decoded_len("TWFuTWE="), Ok(5));
/// assert_eq!(decoded_len(""), Ok(0));
/// ```
pub fn decoded_len(input: &str) -> Result<usize, DecodeError> {
    let bytes = input.as_bytes();
    check_length(bytes.len())?;
    if bytes.is_empty() {
        return Ok(0);
    }

    let final_start = bytes.len() - BLOCK_LEN;
    let padding = trailing_padding(&bytes[final_start..]);
    let kind = BlockKind::from_padding(padding).ok_or(DecodeError::InvalidPadding {
        index: bytes.len() - padding,
    })?;
    Ok(final_start / BLOCK_LEN * BLOCK_BYTES + kind.output_len())
}

/// A standard-alphabet base64 decoder value.
///
/// Holds no state; useful where a decoder needs to be passed around or stored.
///
/// ```
/// use base64_decoder::Decoder;
///
/// let decoder = Decoder::new();
/// assert_eq!(decoder.decode("TWFuTWFu").unwrap(), b"ManMan");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder;

impl Decoder {
    pub const fn new() -> Self {
        Self
    }

    /// See [`decode`].
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }

    /// See [`decode_bin`].
    pub fn decode_bin(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        decode_bin(input)
    }
}
