//! Bit buffer reader with cursor tracking.

use crate::BufferError;

/// A reader that consumes a fixed sequence of bits left to right.
///
/// The reader maintains a bit cursor and provides bounds-checked reads of
/// up to 64 bits at a time. It never rewinds and never zero-fills: asking
/// for more bits than remain is an error, not padding.
///
/// # Example
///
/// ```
/// use bits_buffers::BitReader;
///
/// let mut reader = BitReader::from_hex("D2FE28").unwrap();
///
/// assert_eq!(reader.read(3).unwrap(), 6);
/// assert_eq!(reader.read(3).unwrap(), 4);
/// assert_eq!(reader.consumed(), 6);
/// ```
pub struct BitReader {
    /// The underlying bytes, most significant bit first.
    pub bytes: Vec<u8>,
    /// Current cursor position, in bits.
    pub x: usize,
    /// End position (exclusive), in bits.
    pub end: usize,
}

impl BitReader {
    /// Creates a reader over whole bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        let end = bytes.len() * 8;
        Self { bytes, x: 0, end }
    }

    /// Creates a reader by expanding each hexadecimal digit to 4 bits,
    /// most significant bit first.
    ///
    /// The input must consist of hex digits only (either case, no
    /// separators). An odd number of digits is allowed; the stream then
    /// ends mid-byte.
    pub fn from_hex(hex: &str) -> Result<Self, BufferError> {
        let mut bytes = Vec::with_capacity(hex.len() / 2 + 1);
        let mut digits = 0usize;
        for ch in hex.chars() {
            let nibble = ch.to_digit(16).ok_or(BufferError::InvalidHexDigit(ch))? as u8;
            if digits % 2 == 0 {
                bytes.push(nibble << 4);
            } else {
                bytes[digits / 2] |= nibble;
            }
            digits += 1;
        }
        Ok(Self {
            bytes,
            x: 0,
            end: digits * 4,
        })
    }

    /// Returns the number of bits consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.x
    }

    /// Returns the number of bits remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.x
    }

    /// Reads a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, BufferError> {
        if self.x >= self.end {
            return Err(BufferError::OutOfData);
        }
        let bit = (self.bytes[self.x >> 3] >> (7 - (self.x & 7))) & 1;
        self.x += 1;
        Ok(bit != 0)
    }

    /// Reads the next `width` bits as a big-endian unsigned integer.
    ///
    /// `width` must be at most 64. Fails with [`BufferError::OutOfData`]
    /// when fewer than `width` bits remain, leaving the cursor untouched.
    pub fn read(&mut self, width: usize) -> Result<u64, BufferError> {
        debug_assert!(width <= 64);
        if self.x + width > self.end {
            return Err(BufferError::OutOfData);
        }
        let mut val = 0u64;
        for _ in 0..width {
            let bit = (self.bytes[self.x >> 3] >> (7 - (self.x & 7))) & 1;
            val = (val << 1) | bit as u64;
            self.x += 1;
        }
        Ok(val)
    }
}
