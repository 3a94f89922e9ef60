//! Bit-granular buffer primitives for the BITS transmission protocol.
//!
//! The wire format is a bitstream: packet fields are 1 to 15 bits wide and
//! never align to byte boundaries. [`BitReader`] provides forward-only,
//! cursor-based access to such a stream; [`BitWriter`] builds one.

pub mod reader;
pub mod writer;

use thiserror::Error;

/// Error type for bit buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// More bits were requested than remain in the buffer.
    #[error("unexpected end of bit stream")]
    OutOfData,
    /// The input string contained a character that is not a hex digit.
    #[error("invalid hexadecimal digit {0:?}")]
    InvalidHexDigit(char),
}

pub use reader::BitReader;
pub use writer::BitWriter;
