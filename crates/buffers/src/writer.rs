//! Bit buffer writer with auto-growing capacity.

/// A writer that appends bits most significant bit first.
///
/// # Example
///
/// ```
/// use bits_buffers::BitWriter;
///
/// let mut writer = BitWriter::new();
/// writer.push(6, 3);
/// writer.push(4, 3);
/// writer.push(0b10_0111, 6);
///
/// assert_eq!(writer.len, 12);
/// assert_eq!(writer.to_hex(), "D27");
/// ```
#[derive(Default)]
pub struct BitWriter {
    /// The underlying byte buffer; the last byte may be partially filled.
    pub bytes: Vec<u8>,
    /// Number of bits written so far.
    pub len: usize,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64);
        for i in (0..width).rev() {
            if self.len & 7 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 != 0 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 1 << (7 - (self.len & 7));
            }
            self.len += 1;
        }
    }

    /// Appends every bit of `other` after the bits already written.
    pub fn append(&mut self, other: &BitWriter) {
        for i in 0..other.len {
            let bit = (other.bytes[i >> 3] >> (7 - (i & 7))) & 1;
            self.push(bit as u64, 1);
        }
    }

    /// Consumes the writer and returns the bytes, with the final partial
    /// byte zero-padded.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the buffer as uppercase hex, one digit per 4 bits written
    /// (rounded up), with trailing padding bits rendered as zeros.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let digits = self.len.div_ceil(4);
        let mut hex = String::with_capacity(digits);
        for i in 0..digits {
            let byte = self.bytes[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0xf };
            hex.push(HEX[nibble as usize] as char);
        }
        hex
    }
}
