//! BITS packet encoder, the inverse of the decoder.

use crate::constants::{
    GROUP_CONTINUE, GROUP_WIDTH, SUB_COUNT_WIDTH, TOTAL_BITS_WIDTH, TYPE_ID_LITERAL,
    TYPE_ID_WIDTH, VERSION_WIDTH,
};
use crate::error::EncodeError;
use crate::packet::{LengthEncoding, Packet};
use bits_buffers::BitWriter;

/// Stateless BITS packet encoder.
///
/// Reproduces a packet tree's significant bits; the byte and hex forms are
/// zero-padded to whole bytes the way recorded transmissions are.
#[derive(Default)]
pub struct BitsEncoder;

impl BitsEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a packet tree to bytes, zero-padding the final byte.
    pub fn encode(&self, packet: &Packet) -> Result<Vec<u8>, EncodeError> {
        let mut writer = BitWriter::new();
        self.write_packet(packet, &mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Encodes a packet tree to an uppercase hex transmission.
    pub fn encode_hex(&self, packet: &Packet) -> Result<String, EncodeError> {
        let mut writer = BitWriter::new();
        self.write_packet(packet, &mut writer)?;
        let pad = (8 - writer.len % 8) % 8;
        if pad > 0 {
            writer.push(0, pad);
        }
        Ok(writer.to_hex())
    }

    fn write_packet(&self, packet: &Packet, writer: &mut BitWriter) -> Result<(), EncodeError> {
        match packet {
            Packet::Literal { version, value } => {
                writer.push(*version as u64, VERSION_WIDTH);
                writer.push(TYPE_ID_LITERAL as u64, TYPE_ID_WIDTH);
                self.write_groups(*value, writer);
            }
            Packet::Operator {
                version,
                op,
                length,
                children,
            } => {
                writer.push(*version as u64, VERSION_WIDTH);
                writer.push(op.type_id() as u64, TYPE_ID_WIDTH);
                match length {
                    LengthEncoding::TotalBits => {
                        writer.push(0, 1);
                        let mut body = BitWriter::new();
                        for child in children {
                            self.write_packet(child, &mut body)?;
                        }
                        if body.len >= 1 << TOTAL_BITS_WIDTH {
                            return Err(EncodeError::SubPacketsTooLong(body.len));
                        }
                        writer.push(body.len as u64, TOTAL_BITS_WIDTH);
                        writer.append(&body);
                    }
                    LengthEncoding::SubPacketCount => {
                        writer.push(1, 1);
                        if children.len() >= 1 << SUB_COUNT_WIDTH {
                            return Err(EncodeError::TooManySubPackets(children.len()));
                        }
                        writer.push(children.len() as u64, SUB_COUNT_WIDTH);
                        for child in children {
                            self.write_packet(child, writer)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes a literal's minimal 5-bit group sequence, at least one group
    /// even for zero.
    fn write_groups(&self, value: u128, writer: &mut BitWriter) {
        let bits = 128 - value.leading_zeros() as usize;
        let groups = bits.div_ceil(4).max(1);
        for i in (0..groups).rev() {
            let nibble = ((value >> (i * 4)) & 0xf) as u64;
            let flag = if i == 0 { 0 } else { GROUP_CONTINUE };
            writer.push(flag | nibble, GROUP_WIDTH);
        }
    }
}
