/// Standard base64 alphabet (RFC 4648, section 4).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used to build the decode table at compile time).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = PAD as u8;

/// Number of encoded characters in one block.
pub const BLOCK_LEN: usize = 4;

/// Number of decoded bytes in one unpadded block.
pub(crate) const BLOCK_BYTES: usize = 3;
