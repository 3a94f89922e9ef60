//! Error types for BITS decoding, encoding and evaluation.
//!
//! Every variant is fatal for the current transmission: a single bad bit
//! desynchronizes all sibling and parent parsing, so there is no partial
//! result or retry path.

use crate::packet::Op;
use bits_buffers::BufferError;
use thiserror::Error;

/// Error type for packet decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The bit stream ended inside a packet, or the hex input was not hex.
    #[error(transparent)]
    Buffer(#[from] BufferError),
    /// A total-bit-length operator's children overran the declared budget.
    #[error("sub-packets consumed {consumed} bits where {declared} were declared")]
    SubPacketLength { declared: usize, consumed: usize },
    /// A literal spanned more groups than a `u128` value can hold.
    #[error("literal value wider than 128 bits")]
    LiteralOverflow,
}

/// Error type for packet encoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The children's combined encoding does not fit the 15-bit length field.
    #[error("sub-packet encoding of {0} bits exceeds the 15-bit length field")]
    SubPacketsTooLong(usize),
    /// The child count does not fit the 11-bit count field.
    #[error("{0} sub-packets exceed the 11-bit count field")]
    TooManySubPackets(usize),
}

/// Error type for evaluating a packet tree as an expression.
///
/// The decoder cannot produce trees that trigger the arity variants; they
/// guard hand-constructed trees.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// An aggregate operator (sum, product, min, max) has no children.
    #[error("{0:?} operator has no operands")]
    NoOperands(Op),
    /// A comparison operator does not have exactly two children.
    #[error("{op:?} operator expects exactly 2 operands, got {arity}")]
    ComparisonArity { op: Op, arity: usize },
    /// A sum or product does not fit in 128 bits.
    #[error("arithmetic overflow during evaluation")]
    Overflow,
}
