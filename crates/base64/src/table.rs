//! Compile-time reverse lookup table for the standard alphabet.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// What a single input byte means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sextet {
    /// An alphabet symbol and its 6-bit value.
    Value(u8),
    Pad,
    Invalid,
}

/// Indexed by byte value. Every byte outside the alphabet and `=` is `Invalid`.
pub(crate) const DECODE_TABLE: [Sextet; 256] = build_table();

const fn build_table() -> [Sextet; 256] {
    let mut table = [Sextet::Invalid; 256];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        table[ALPHABET_BYTES[i] as usize] = Sextet::Value(i as u8);
        i += 1;
    }
    table[PAD_BYTE as usize] = Sextet::Pad;
    table
}

#[inline]
pub(crate) fn lookup(byte: u8) -> Sextet {
    DECODE_TABLE[byte as usize]
}
