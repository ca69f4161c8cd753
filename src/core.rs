//! Core types: symbol words and flat bit positions

use bitfield::{Bit, BitMut, BitRange, BitRangeMut};
use num_traits::{PrimInt, Unsigned};

use crate::bits;
use crate::limits::MAX_SYMBOL_BITS;

/// An unsigned primitive word holding packed line or data bits
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. The same type is
/// used on both sides of the codec.
pub trait Symbol:
    PrimInt
    + Unsigned
    + Bit
    + BitMut
    + BitRange<Self>
    + BitRangeMut<Self>
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Bit width of the word
    const BITS: usize;

    /// Compile-time width check, evaluated when a coder is built for `Self`
    ///
    /// Bit positions inside a word are tracked on at most 256 bits, and a
    /// symbol pair must never be split by an odd word width.
    const WIDTH_OK: () = assert!(
        Self::BITS >= 2 && Self::BITS <= MAX_SYMBOL_BITS && Self::BITS % 2 == 0,
        "symbol word width must be even and at most 256 bits"
    );
}

macro_rules! impl_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                const BITS: usize = <$t>::BITS as usize;
            }
        )*
    };
}

impl_symbol!(u8, u16, u32, u64, u128);

/// Location of one bit of a flat MSB-first stream
///
/// `bit` counts from the least significant bit of the word, so flat position
/// 0 is bit `W - 1` of word 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPos {
    /// Index of the word in the sequence
    pub word: usize,
    /// Bit inside the word, 0 = least significant
    pub bit: usize,
}

impl BitPos {
    /// Locate flat bit `index` in a stream of `W` words
    #[inline]
    pub fn locate<W: Symbol>(index: usize) -> Self {
        BitPos {
            word: index / W::BITS,
            bit: W::BITS - 1 - index % W::BITS,
        }
    }

    /// Flat index of this position in a stream of `W` words
    #[inline]
    pub fn flat<W: Symbol>(&self) -> usize {
        self.word * W::BITS + (W::BITS - 1 - self.bit)
    }
}

impl std::fmt::Display for BitPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "word {} bit {}", self.word, self.bit)
    }
}

/// Number of `W` words needed to hold `bits` bits
#[inline]
pub fn words_for_bits<W: Symbol>(bits: usize) -> usize {
    bits.div_ceil(W::BITS)
}

/// Read flat bit `index` of `words`
///
/// Panics if `index` is past the end of `words`; callers check spans first.
#[inline]
pub fn read_flat<W: Symbol>(words: &[W], index: usize) -> bool {
    let pos = BitPos::locate::<W>(index);
    bits::test_bit(words[pos.word], pos.bit)
}

/// Write flat bit `index` of `words`, leaving every other bit untouched
#[inline]
pub fn write_flat<W: Symbol>(words: &mut [W], index: usize, value: bool) {
    let pos = BitPos::locate::<W>(index);
    bits::set_bit(&mut words[pos.word], pos.bit, value);
}
