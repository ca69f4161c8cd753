//! Differential Manchester encoding and decoding
//!
//! Every data bit is carried by a two-bit symbol. The first line bit of a
//! symbol continues the level left by the previous symbol; a transition
//! inside the symbol means `1`, no transition means `0`. Decoding therefore
//! only needs the two bits of each symbol, while encoding tracks the running
//! line level for the duration of one call.
//!
//! Words are read and written as a flat MSB-first bit stream (see
//! [`BitPos`](crate::core::BitPos)).

use std::marker::PhantomData;

use num_traits::PrimInt;

use crate::core::{read_flat, words_for_bits, write_flat, Symbol};
use crate::error::{CodingError, Result};
use crate::limits::{INITIAL_LEVEL, LINE_BITS_PER_DATA_BIT};

/// Decode a single symbol: `true` when its two line bits differ
#[inline]
pub fn decode_symbol(first: bool, second: bool) -> bool {
    first != second
}

/// Encode a single data bit given the line level left by the previous symbol
///
/// Returns the two line bits of the symbol; the second one is the level
/// handed to the next symbol.
#[inline]
pub fn encode_symbol(level: bool, bit: bool) -> (bool, bool) {
    (level, level ^ bit)
}

/// Bit and word counts of one coding call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coded {
    /// Input bits consumed
    pub bits_read: usize,
    /// Output bits written
    pub bits_written: usize,
    /// Output words touched, the last one possibly partially
    pub words_written: usize,
}

/// A coder turning one packed bit stream into another
///
/// Input and output use the same word type. Output bits outside the coded
/// span are never modified.
pub trait DataCoder<W: Symbol> {
    /// Short name used in log records
    const DIRECTION: &'static str;

    /// Number of output bits produced from `input_bits` input bits
    fn output_bits(&self, input_bits: usize) -> Result<usize>;

    /// Code `len` input bits starting at flat bit `offset` of `input`
    ///
    /// Output bits are written from flat bit 0 of `output`. Lengths and
    /// capacity are checked before anything is written.
    fn code_span(&self, input: &[W], offset: usize, len: usize, output: &mut [W])
        -> Result<Coded>;

    /// Code every word of `input`
    fn code(&self, input: &[W], output: &mut [W]) -> Result<Coded> {
        self.code_span(input, 0, input.len() * W::BITS, output)
    }

    /// Code the first `in_len` words of `input`, with the count given in any
    /// integer index type
    fn code_len<I: PrimInt>(&self, input: &[W], in_len: I, output: &mut [W]) -> Result<Coded> {
        let words = index_to_usize(in_len, input.len())?;
        self.code(&input[..words], output)
    }

    /// Output words needed to code `input_words` whole words
    fn required_words(&self, input_words: usize) -> Result<usize> {
        let input_bits = input_words
            .checked_mul(W::BITS)
            .ok_or_else(|| CodingError::invalid_length("input bit count overflows usize"))?;
        Ok(words_for_bits::<W>(self.output_bits(input_bits)?))
    }

    /// Code every word of `input` into a freshly allocated, zeroed buffer
    fn code_to_vec(&self, input: &[W]) -> Result<Vec<W>> {
        let mut output = vec![W::zero(); self.required_words(input.len())?];
        self.code(input, &mut output)?;
        Ok(output)
    }
}

/// Differential Manchester decoder: line symbols to data bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferentialManchesterDecoder<W> {
    word: PhantomData<W>,
}

impl<W: Symbol> DifferentialManchesterDecoder<W> {
    /// Create a decoder for `W` words
    ///
    /// Fails to compile for word types wider than 256 bits or of odd width.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = W::WIDTH_OK;
        DifferentialManchesterDecoder { word: PhantomData }
    }
}

impl<W: Symbol> Default for DifferentialManchesterDecoder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Symbol> DataCoder<W> for DifferentialManchesterDecoder<W> {
    const DIRECTION: &'static str = "decode";

    fn output_bits(&self, input_bits: usize) -> Result<usize> {
        if input_bits % LINE_BITS_PER_DATA_BIT != 0 {
            return Err(CodingError::invalid_length(format!(
                "odd number of line bits: {}",
                input_bits
            )));
        }
        Ok(input_bits / LINE_BITS_PER_DATA_BIT)
    }

    fn code_span(
        &self,
        input: &[W],
        offset: usize,
        len: usize,
        output: &mut [W],
    ) -> Result<Coded> {
        let coded = check_span(self, input, offset, len, output)?;

        for k in 0..coded.bits_written {
            let first = read_flat(input, offset + LINE_BITS_PER_DATA_BIT * k);
            let second = read_flat(input, offset + LINE_BITS_PER_DATA_BIT * k + 1);
            write_flat(output, k, decode_symbol(first, second));
        }

        Ok(coded)
    }
}

/// Differential Manchester encoder: data bits to line symbols
///
/// The line level starts low at every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferentialManchesterEncoder<W> {
    word: PhantomData<W>,
}

impl<W: Symbol> DifferentialManchesterEncoder<W> {
    /// Create an encoder for `W` words
    ///
    /// Fails to compile for word types wider than 256 bits or of odd width.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = W::WIDTH_OK;
        DifferentialManchesterEncoder { word: PhantomData }
    }
}

impl<W: Symbol> Default for DifferentialManchesterEncoder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Symbol> DataCoder<W> for DifferentialManchesterEncoder<W> {
    const DIRECTION: &'static str = "encode";

    fn output_bits(&self, input_bits: usize) -> Result<usize> {
        input_bits
            .checked_mul(LINE_BITS_PER_DATA_BIT)
            .ok_or_else(|| CodingError::invalid_length("line bit count overflows usize"))
    }

    fn code_span(
        &self,
        input: &[W],
        offset: usize,
        len: usize,
        output: &mut [W],
    ) -> Result<Coded> {
        let coded = check_span(self, input, offset, len, output)?;

        let mut level = INITIAL_LEVEL;
        for k in 0..coded.bits_read {
            let (first, second) = encode_symbol(level, read_flat(input, offset + k));
            write_flat(output, LINE_BITS_PER_DATA_BIT * k, first);
            write_flat(output, LINE_BITS_PER_DATA_BIT * k + 1, second);
            level = second;
        }

        Ok(coded)
    }
}

/// Validate a span against both buffers and size the result
fn check_span<W: Symbol, C: DataCoder<W>>(
    coder: &C,
    input: &[W],
    offset: usize,
    len: usize,
    output: &[W],
) -> Result<Coded> {
    let available_bits = input.len().saturating_mul(W::BITS);
    let span_ok = offset
        .checked_add(len)
        .is_some_and(|end| end <= available_bits);
    if !span_ok {
        let err = CodingError::invalid_length(format!(
            "span of {} bits at offset {} exceeds input of {} bits",
            len, offset, available_bits
        ));
        tracing::debug!(direction = C::DIRECTION, %err, "rejected coding call");
        return Err(err);
    }

    let bits_written = coder.output_bits(len).inspect_err(|err| {
        tracing::debug!(direction = C::DIRECTION, %err, "rejected coding call");
    })?;

    let words_written = words_for_bits::<W>(bits_written);
    if words_written > output.len() {
        let err = CodingError::insufficient_buffer(words_written, output.len());
        tracing::debug!(direction = C::DIRECTION, %err, "rejected coding call");
        return Err(err);
    }

    tracing::trace!(
        direction = C::DIRECTION,
        word_bits = W::BITS,
        offset,
        bits_read = len,
        bits_written,
        "coding differential Manchester span"
    );

    Ok(Coded {
        bits_read: len,
        bits_written,
        words_written,
    })
}

/// Convert a caller-supplied word count to `usize`, bounded by `available`
fn index_to_usize<I: PrimInt>(len: I, available: usize) -> Result<usize> {
    match len.to_usize() {
        Some(words) if words <= available => Ok(words),
        Some(words) => Err(CodingError::invalid_length(format!(
            "length {} exceeds input of {} words",
            words, available
        ))),
        None => Err(CodingError::invalid_length(
            "length is not a valid word count",
        )),
    }
}

/// Decode every word of `input` into `output`
///
/// Two input words fill one output word: the first one its high half, the
/// second one its low half.
pub fn decode<W: Symbol>(input: &[W], output: &mut [W]) -> Result<Coded> {
    DifferentialManchesterDecoder::new().code(input, output)
}

/// Decode the first `in_len` words of `input` into `output`
pub fn decode_len<W: Symbol, I: PrimInt>(input: &[W], in_len: I, output: &mut [W]) -> Result<Coded> {
    DifferentialManchesterDecoder::new().code_len(input, in_len, output)
}

/// Decode `len` line bits starting at flat bit `offset` of `input`
pub fn decode_span<W: Symbol>(
    input: &[W],
    offset: usize,
    len: usize,
    output: &mut [W],
) -> Result<Coded> {
    DifferentialManchesterDecoder::new().code_span(input, offset, len, output)
}

/// Decode every word of `input` into a new buffer
pub fn decode_to_vec<W: Symbol>(input: &[W]) -> Result<Vec<W>> {
    DifferentialManchesterDecoder::new().code_to_vec(input)
}

/// Encode every word of `input` into `output`
///
/// Each input word fills two output words.
pub fn encode<W: Symbol>(input: &[W], output: &mut [W]) -> Result<Coded> {
    DifferentialManchesterEncoder::new().code(input, output)
}

/// Encode the first `in_len` words of `input` into `output`
pub fn encode_len<W: Symbol, I: PrimInt>(input: &[W], in_len: I, output: &mut [W]) -> Result<Coded> {
    DifferentialManchesterEncoder::new().code_len(input, in_len, output)
}

/// Encode `len` data bits starting at flat bit `offset` of `input`
pub fn encode_span<W: Symbol>(
    input: &[W],
    offset: usize,
    len: usize,
    output: &mut [W],
) -> Result<Coded> {
    DifferentialManchesterEncoder::new().code_span(input, offset, len, output)
}

/// Encode every word of `input` into a new buffer
pub fn encode_to_vec<W: Symbol>(input: &[W]) -> Result<Vec<W>> {
    DifferentialManchesterEncoder::new().code_to_vec(input)
}
