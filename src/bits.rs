//! Bit-vector plumbing shared by every stage of the codec
//!
//! All codewords, syndromes and ports are carried as [`Bits`], a `bitvec`
//! vector whose index 0 is the least significant bit. Text forms (CLI input,
//! test vectors) are written most-significant bit first, the way the bits of
//! a register are usually printed.

use crate::error::{DecodeError, HammingResult};
use bitvec::prelude::*;

/// Owned bit vector, bit 0 is the least significant bit
pub type Bits = BitVec<u64, Lsb0>;

/// Borrowed view of [`Bits`]
pub type BitsRef = BitSlice<u64, Lsb0>;

/// Create an all-zero vector of `width` bits
#[inline]
pub fn zeros(width: usize) -> Bits {
    BitVec::repeat(false, width)
}

/// Parse an MSB-first string of `0`/`1` characters.
///
/// Underscores are accepted as digit separators (`1011_0110`). The empty
/// string is rejected since no port has zero width.
pub fn parse_bits(text: &str) -> HammingResult<Bits> {
    let digits: Vec<char> = text.trim().chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(DecodeError::InvalidBitString(text.to_string()));
    }

    let mut bits = zeros(digits.len());
    for (i, c) in digits.iter().rev().enumerate() {
        match c {
            '0' => {}
            '1' => bits.set(i, true),
            _ => return Err(DecodeError::InvalidBitString(text.to_string())),
        }
    }
    Ok(bits)
}

/// Format bits MSB first, the inverse of [`parse_bits`]
pub fn format_bits(bits: &BitsRef) -> String {
    bits.iter()
        .rev()
        .map(|bit| if *bit { '1' } else { '0' })
        .collect()
}

/// Low `width` bits of `value`; positions above bit 63 are zero
pub fn bits_from_u64(value: u64, width: usize) -> Bits {
    let mut bits = zeros(width);
    for i in 0..width.min(64) {
        bits.set(i, (value >> i) & 1 == 1);
    }
    bits
}

/// Interpret bits as an unsigned integer. Set bits above 63 are ignored.
pub fn bits_to_u64(bits: &BitsRef) -> u64 {
    bits.iter_ones()
        .take_while(|&i| i < 64)
        .fold(0u64, |acc, i| acc | (1u64 << i))
}

/// Interpret a short vector (a syndrome, a bit position) as an index
#[inline]
pub fn bits_to_index(bits: &BitsRef) -> usize {
    bits_to_u64(bits) as usize
}
