//! Bit regrouping between bytes and quintets, plus the 32-symbol alphabet.
//!
//! A quintet is a `u8` holding a 5-bit value (`0..32`). Its position in
//! [`ALPHABET`] is its character.

/// Alphabet used for the body and checksum of native addresses.
pub const ALPHABET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup: ASCII byte → quintet, `-1` when outside the alphabet.
/// Uppercase letters map to the same value as their lowercase form.
const REVERSE: [i8; 128] = build_reverse();

const fn build_reverse() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as i8;
        if c.is_ascii_lowercase() {
            table[c.to_ascii_uppercase() as usize] = i as i8;
        }
        i += 1;
    }
    table
}

/// Repack bytes into quintets, most-significant bit first.
///
/// Leftover bits (1–4) are zero-padded on the right into one final quintet.
pub fn bytes_to_quintets(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    out
}

/// Repack quintets into bytes, most-significant bit first.
///
/// Trailing bits that do not fill a byte are discarded without checking that
/// they are zero. Only the low 5 bits of each input value are used.
pub fn quintets_to_bytes(quintets: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(quintets.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &q in quintets {
        acc = (acc << 5) | u32::from(q & 0x1f);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    out
}

/// Map a character to its quintet, case-insensitively.
pub fn char_to_quintet(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match REVERSE[c as usize] {
        -1 => None,
        v => Some(v as u8),
    }
}

/// Map a quintet to its (lowercase) character. Values `>= 32` are masked.
pub fn quintet_to_char(q: u8) -> char {
    ALPHABET[(q & 0x1f) as usize] as char
}

/// Decode a string of alphabet characters into quintets.
///
/// Returns `None` on the first character outside the alphabet.
pub fn decode_chars(s: &str) -> Option<Vec<u8>> {
    s.chars().map(char_to_quintet).collect()
}

/// Encode quintets as alphabet characters.
pub fn encode_chars(quintets: &[u8]) -> String {
    quintets.iter().map(|&q| quintet_to_char(q)).collect()
}
