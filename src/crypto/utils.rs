use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Convert text to its bit sequence, 8 bits per character, MSB first.
/// Precondition: single-byte-per-character text; code points above 255 are
/// truncated to their low 8 bits.
pub fn text_to_bits(text: &str) -> BitVec {
    let mut bits = BitVec::with_capacity(text.len() * 8);
    for ch in text.chars() {
        let code = ch as u32;
        for i in (0..8).rev() {
            bits.push((code >> i) & 1 != 0);
        }
    }
    bits
}

/// Inverse of [`text_to_bits`]: groups of 8 bits become characters.
pub fn bits_to_text(bits: &BitSlice) -> Result<String, CipherError> {
    if bits.len() % 8 != 0 {
        return Err(CipherError::MisalignedBits {
            length: bits.len(),
            group: 8,
        });
    }

    let mut text = String::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        text.push(char::from(byte));
    }
    Ok(text)
}

/// Render a bit sequence as lowercase hex, one digit per 4-bit group.
pub fn bits_to_hex(bits: &BitSlice) -> Result<String, CipherError> {
    if bits.len() % 4 != 0 {
        return Err(CipherError::MisalignedBits {
            length: bits.len(),
            group: 4,
        });
    }

    let mut hex = String::with_capacity(bits.len() / 4);
    for chunk in bits.chunks(4) {
        let mut nibble = 0u32;
        for bit in chunk.iter() {
            nibble = (nibble << 1) | u32::from(*bit);
        }
        // nibble < 16, so the digit always exists
        hex.push(char::from_digit(nibble, 16).unwrap_or('0'));
    }
    Ok(hex)
}

/// PKCS#7-style padding that is always applied: an already aligned input
/// gains a full extra block of 8. Lengths are counted in characters.
pub fn pad_text(text: &str) -> String {
    let pad_len = 8 - text.chars().count() % 8;
    let pad_char = char::from(pad_len as u8);
    let mut padded = text.to_string();
    for _ in 0..pad_len {
        padded.push(pad_char);
    }
    padded
}

/// Normalize a key to exactly 8 characters: a short key is extended by
/// cyclically appending its own prefix, a long one is truncated. Idempotent.
/// Precondition: the key is non-empty.
pub fn adjust_key_length(key: &str) -> String {
    let mut chars: Vec<char> = key.chars().collect();
    while chars.len() < 8 {
        let prefix: Vec<char> = chars.iter().take(8 - chars.len()).copied().collect();
        chars.extend(prefix);
    }
    chars.truncate(8);
    chars.into_iter().collect()
}

/// XOR two bit sequences with zip-shortest semantics: the result has the
/// length of the shorter input. The round function's 32-vs-64 key mixing
/// relies on this truncation.
pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> BitVec {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| *x ^ *y)
        .collect()
}

/// Reorder bits through a table of 1-based source indices. An index past the
/// end of the input yields a 0 bit instead of failing.
pub fn permute_bits(bits: &BitSlice, table: &[usize]) -> BitVec {
    let mut permuted = BitVec::with_capacity(table.len());
    for &pos in table {
        let idx = pos.saturating_sub(1);
        if idx < bits.len() {
            permuted.push(bits[idx]);
        } else {
            permuted.push(false);
        }
    }
    permuted
}

/// Split a block into its two halves at the midpoint.
pub fn split_half(block: &BitSlice) -> (&BitSlice, &BitSlice) {
    block.split_at(block.len() / 2)
}
