//! Bit-field access and parity helpers over symbol words
//!
//! Thin wrappers over the `bitfield` traits so the codec and its callers
//! name bits the same way: bit 0 is the least significant bit, ranges are
//! given as an LSB offset and a length.

use bitfield::{Bit, BitMut, BitRange, BitRangeMut};

use crate::core::Symbol;

/// Test a single bit
#[inline]
pub fn test_bit<W: Symbol>(word: W, bit: usize) -> bool {
    debug_assert!(bit < W::BITS);
    Bit::bit(&word, bit)
}

/// Set a single bit high or low
#[inline]
pub fn set_bit<W: Symbol>(word: &mut W, bit: usize, high: bool) {
    debug_assert!(bit < W::BITS);
    BitMut::set_bit(word, bit, high);
}

/// Extract `length` bits starting at `lsb_offset`, shifted down to bit 0
///
/// A zero `length` yields zero.
#[inline]
pub fn test_bit_range<W: Symbol>(word: W, lsb_offset: usize, length: usize) -> W {
    if length == 0 {
        return W::zero();
    }
    debug_assert!(lsb_offset + length <= W::BITS);
    BitRange::<W>::bit_range(&word, lsb_offset + length - 1, lsb_offset)
}

/// Replace `length` bits starting at `lsb_offset` with the low bits of `value`
///
/// Bits of `value` above `length` are discarded.
#[inline]
pub fn set_bit_range<W: Symbol>(word: &mut W, lsb_offset: usize, length: usize, value: W) {
    if length == 0 {
        return;
    }
    debug_assert!(lsb_offset + length <= W::BITS);
    let value = value & (W::max_value() >> (W::BITS - length));
    BitRangeMut::<W>::set_bit_range(word, lsb_offset + length - 1, lsb_offset, value);
}

/// Even parity bit of a word: set when the word holds an odd number of ones
#[inline]
pub fn parity_even<W: Symbol>(word: W) -> bool {
    word.count_ones() % 2 == 1
}

/// Odd parity bit of a word: set when the word holds an even number of ones
#[inline]
pub fn parity_odd<W: Symbol>(word: W) -> bool {
    !parity_even(word)
}
