//! Recursive descent decoder for the BITS bit stream.

use crate::constants::{
    GROUP_CONTINUE, GROUP_WIDTH, SUB_COUNT_WIDTH, TOTAL_BITS_WIDTH, TYPE_ID_WIDTH, VERSION_WIDTH,
};
use crate::error::DecodeError;
use crate::packet::{LengthEncoding, Op, Packet};
use bits_buffers::BitReader;
use log::debug;

/// Stateless BITS packet decoder.
///
/// One call to [`BitsDecoder::read_packet`] consumes exactly one packet's
/// encoding and leaves the cursor on the bit that follows it, so siblings
/// can be read back to back. The bit stream is consumed strictly left to
/// right, depth first, with no gaps between a packet and its successor.
#[derive(Default)]
pub struct BitsDecoder;

impl BitsDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one top-level packet from a hex transmission.
    ///
    /// Trailing padding bits after the packet are left unread, never
    /// interpreted as further packets.
    pub fn decode_hex(&self, hex: &str) -> Result<Packet, DecodeError> {
        let mut reader = BitReader::from_hex(hex)?;
        self.read_packet(&mut reader)
    }

    /// Decodes one top-level packet from raw bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<Packet, DecodeError> {
        let mut reader = BitReader::new(bytes.to_vec());
        self.read_packet(&mut reader)
    }

    /// Reads exactly one packet at the reader's cursor.
    pub fn read_packet(&self, reader: &mut BitReader) -> Result<Packet, DecodeError> {
        let version = reader.read(VERSION_WIDTH)? as u8;
        let type_id = reader.read(TYPE_ID_WIDTH)? as u8;
        debug!("header: version={version} type_id={type_id}");

        // Type id 4 is the only 3-bit value that maps to no operator.
        match Op::from_type_id(type_id) {
            None => {
                let value = self.read_literal(reader)?;
                debug!("literal: value={value}");
                Ok(Packet::Literal { version, value })
            }
            Some(op) => {
                let (length, children) = self.read_children(reader)?;
                Ok(Packet::Operator {
                    version,
                    op,
                    length,
                    children,
                })
            }
        }
    }

    /// Reads a literal's 5-bit groups, low nibble first on the wire's
    /// most-significant side. Always reads at least one group.
    fn read_literal(&self, reader: &mut BitReader) -> Result<u128, DecodeError> {
        let mut value = 0u128;
        loop {
            let group = reader.read(GROUP_WIDTH)?;
            if value >> 124 != 0 {
                return Err(DecodeError::LiteralOverflow);
            }
            value = (value << 4) | (group & 0xf) as u128;
            if group & GROUP_CONTINUE == 0 {
                return Ok(value);
            }
        }
    }

    /// Reads an operator's length-mode bit and its children under the
    /// matching termination rule.
    fn read_children(
        &self,
        reader: &mut BitReader,
    ) -> Result<(LengthEncoding, Vec<Packet>), DecodeError> {
        if reader.read_bit()? {
            let count = reader.read(SUB_COUNT_WIDTH)? as usize;
            debug!("operator: {count} sub-packets declared");
            let mut children = Vec::with_capacity(count);
            for _ in 0..count {
                children.push(self.read_packet(reader)?);
            }
            Ok((LengthEncoding::SubPacketCount, children))
        } else {
            let declared = reader.read(TOTAL_BITS_WIDTH)? as usize;
            debug!("operator: {declared} bits of sub-packets declared");
            let start = reader.consumed();
            let mut children = Vec::new();
            while reader.consumed() - start < declared {
                children.push(self.read_packet(reader)?);
            }
            let consumed = reader.consumed() - start;
            if consumed != declared {
                return Err(DecodeError::SubPacketLength { declared, consumed });
            }
            Ok((LengthEncoding::TotalBits, children))
        }
    }
}
