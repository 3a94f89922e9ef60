//! The decoded packet tree.

use crate::constants::TYPE_ID_LITERAL;

/// Combining rule of an operator packet, selected by the 3-bit type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Sum,
    Product,
    Min,
    Max,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl Op {
    /// Maps a wire type id to its operator.
    ///
    /// Returns `None` for the literal tag (4) and for values outside the
    /// 3-bit range.
    pub fn from_type_id(type_id: u8) -> Option<Op> {
        match type_id {
            0 => Some(Op::Sum),
            1 => Some(Op::Product),
            2 => Some(Op::Min),
            3 => Some(Op::Max),
            5 => Some(Op::GreaterThan),
            6 => Some(Op::LessThan),
            7 => Some(Op::EqualTo),
            _ => None,
        }
    }

    /// The 3-bit type id this operator is encoded as.
    pub fn type_id(&self) -> u8 {
        match self {
            Op::Sum => 0,
            Op::Product => 1,
            Op::Min => 2,
            Op::Max => 3,
            Op::GreaterThan => 5,
            Op::LessThan => 6,
            Op::EqualTo => 7,
        }
    }
}

/// How an operator packet's children are framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthEncoding {
    /// Length type 0: a 15-bit total bit length of all children.
    TotalBits,
    /// Length type 1: an 11-bit count of immediate children.
    SubPacketCount,
}

/// One decoded packet: a literal value or an operator over children.
///
/// The tree is owning and read-only after decoding: each child belongs to
/// exactly one parent, and the two traversals ([`crate::version_sum`],
/// [`crate::evaluate`]) never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// A literal value packet (type id 4).
    ///
    /// Values are held as `u128`, which covers literals of up to 32
    /// five-bit groups; wider literals are rejected at decode time.
    Literal { version: u8, value: u128 },
    /// An operator packet combining its children's values.
    Operator {
        version: u8,
        op: Op,
        length: LengthEncoding,
        children: Vec<Packet>,
    },
}

impl Packet {
    /// The packet's 3-bit version field.
    pub fn version(&self) -> u8 {
        match self {
            Packet::Literal { version, .. } | Packet::Operator { version, .. } => *version,
        }
    }

    /// The packet's 3-bit wire type id.
    pub fn type_id(&self) -> u8 {
        match self {
            Packet::Literal { .. } => TYPE_ID_LITERAL,
            Packet::Operator { op, .. } => op.type_id(),
        }
    }

    /// Number of packets in this subtree, including this one.
    pub fn count(&self) -> usize {
        match self {
            Packet::Literal { .. } => 1,
            Packet::Operator { children, .. } => {
                1 + children.iter().map(Packet::count).sum::<usize>()
            }
        }
    }
}
