//! Per-block padding classification and bit regrouping.

use crate::constants::{BLOCK_BYTES, BLOCK_LEN, PAD_BYTE};
use crate::table::{lookup, Sextet};
use crate::DecodeError;

/// How much of a 4-character block carries payload.
///
/// Only the final block of an input can be padded; every other block is
/// [`BlockKind::Full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Four symbols, 24 bits, 3 bytes.
    Full,
    /// Three symbols and one `=`: 18 bits, 2 bytes, trailing 2 bits discarded.
    OnePad,
    /// Two symbols and `==`: 12 bits, 1 byte, trailing 4 bits discarded.
    TwoPad,
}

impl BlockKind {
    /// Number of `=` characters closing the block.
    pub const fn padding(self) -> usize {
        match self {
            BlockKind::Full => 0,
            BlockKind::OnePad => 1,
            BlockKind::TwoPad => 2,
        }
    }

    /// Number of bytes the block decodes to.
    pub const fn output_len(self) -> usize {
        BLOCK_BYTES - self.padding()
    }

    pub(crate) const fn from_padding(padding: usize) -> Option<Self> {
        match padding {
            0 => Some(BlockKind::Full),
            1 => Some(BlockKind::OnePad),
            2 => Some(BlockKind::TwoPad),
            _ => None,
        }
    }
}

/// Counts the `=` run at the end of `block`.
pub(crate) fn trailing_padding(block: &[u8]) -> usize {
    block.iter().rev().take_while(|&&b| b == PAD_BYTE).count()
}

/// Decodes one block starting at byte `offset` of the whole input and
/// appends its bytes to `out`.
///
/// Nothing is appended when an error is returned.
pub(crate) fn decode_block(
    block: &[u8],
    offset: usize,
    is_final: bool,
    out: &mut Vec<u8>,
) -> Result<BlockKind, DecodeError> {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let padding = if is_final {
        trailing_padding(block)
    } else {
        0
    };
    let symbols = BLOCK_LEN - padding;

    let mut bits: u32 = 0;
    for (i, &byte) in block[..symbols].iter().enumerate() {
        let index = offset + i;
        match lookup(byte) {
            Sextet::Value(value) => bits |= u32::from(value) << (18 - 6 * i),
            Sextet::Pad => return Err(DecodeError::InvalidPadding { index }),
            Sextet::Invalid => return Err(DecodeError::InvalidSymbol { index, byte }),
        }
    }

    let kind = BlockKind::from_padding(padding).ok_or(DecodeError::InvalidPadding {
        index: offset + symbols,
    })?;

    let bytes = [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8];
    out.extend_from_slice(&bytes[..kind.output_len()]);
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(block: &[u8], is_final: bool) -> Result<(BlockKind, Vec<u8>), DecodeError> {
        let mut out = Vec::new();
        let kind = decode_block(block, 0, is_final, &mut out)?;
        Ok((kind, out))
    }

    #[test]
    fn full_block() {
        assert_eq!(run(b"TWFu", true), Ok((BlockKind::Full, b"Man".to_vec())));
        assert_eq!(run(b"TWFu", false), Ok((BlockKind::Full, b"Man".to_vec())));
    }

    #[test]
    fn one_pad() {
        assert_eq!(run(b"TWE=", true), Ok((BlockKind::OnePad, b"Ma".to_vec())));
    }

    #[test]
    fn two_pad() {
        assert_eq!(run(b"TQ==", true), Ok((BlockKind::TwoPad, b"M".to_vec())));
    }

    #[test]
    fn padding_in_inner_block() {
        assert_eq!(run(b"TWE=", false), Err(DecodeError::InvalidPadding { index: 3 }));
        assert_eq!(run(b"TQ==", false), Err(DecodeError::InvalidPadding { index: 2 }));
    }

    #[test]
    fn too_much_padding() {
        assert_eq!(run(b"T===", true), Err(DecodeError::InvalidPadding { index: 1 }));
        assert_eq!(run(b"====", true), Err(DecodeError::InvalidPadding { index: 0 }));
    }

    #[test]
    fn symbol_before_padding_run_wins() {
        assert_eq!(
            run(b"#===", true),
            Err(DecodeError::InvalidSymbol { index: 0, byte: b'#' })
        );
    }

    #[test]
    fn padding_followed_by_symbol() {
        assert_eq!(run(b"TW=u", true), Err(DecodeError::InvalidPadding { index: 2 }));
    }

    #[test]
    fn offset_is_reported() {
        let mut out = Vec::new();
        let err = decode_block(b"AB#D", 8, true, &mut out).unwrap_err();
        assert_eq!(err, DecodeError::InvalidSymbol { index: 10, byte: b'#' });
        assert!(out.is_empty());
    }

    #[test]
    fn discarded_bits_are_ignored() {
        // 'R' leaves four non-zero bits past the single output byte.
        assert_eq!(run(b"TR==", true), Ok((BlockKind::TwoPad, vec![0x4d])));
    }

    #[test]
    fn output_lengths() {
        assert_eq!(BlockKind::Full.output_len(), 3);
        assert_eq!(BlockKind::OnePad.output_len(), 2);
        assert_eq!(BlockKind::TwoPad.output_len(), 1);
    }
}
