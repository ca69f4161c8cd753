//! # Differential Manchester Codec
//!
//! A bit-level Rust codec for Differential Manchester line coding.
//!
//! Each data bit travels as a two-bit symbol on the line. A transition
//! between the two line bits of a symbol is a `1`, no transition is a `0`,
//! and every symbol starts at the level the previous one ended on. This
//! library provides:
//!
//! - Decoding of packed line symbols into packed data bits
//! - Encoding of packed data bits into packed line symbols
//! - Generic word types (`u8` through `u128`) with MSB-first bit order
//! - Bit-field and parity helpers over the same word types
//! - Error handling for undersized buffers and malformed lengths
//!
//! Buffers are owned by the caller; the codec writes into them in place and
//! never touches output bits outside the coded span.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of [`Coded`] summaries
//!
//! ## Example
//!
//! ```
//! use differential_manchester::{decode, encode};
//!
//! let data = [0xA5u8, 0x3C];
//! let mut line = [0u8; 4];
//! encode(&data, &mut line)?;
//!
//! let mut decoded = [0u8; 2];
//! decode(&line, &mut decoded)?;
//! assert_eq!(decoded, data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub mod core;
pub mod encoding;
pub mod error;

pub use crate::core::{BitPos, Symbol};
pub use encoding::{
    decode, decode_len, decode_span, decode_symbol, decode_to_vec, encode, encode_len,
    encode_span, encode_symbol, encode_to_vec, Coded, DataCoder, DifferentialManchesterDecoder,
    DifferentialManchesterEncoder,
};
pub use error::{CodingError, Result};

/// Codec constants
pub mod limits {
    /// Widest symbol word the bit-index arithmetic supports
    pub const MAX_SYMBOL_BITS: usize = 256;

    /// Line bits carried per data bit
    pub const LINE_BITS_PER_DATA_BIT: usize = 2;

    /// Line level the encoder starts every call from (low)
    pub const INITIAL_LEVEL: bool = false;
}
