//! Field widths and tags of the BITS wire format.

/// Width of the packet version field.
pub const VERSION_WIDTH: usize = 3;
/// Width of the packet type id field.
pub const TYPE_ID_WIDTH: usize = 3;
/// Type id tagging a literal value packet.
pub const TYPE_ID_LITERAL: u8 = 4;
/// Width of one literal group: 1 continuation bit plus 4 value bits.
pub const GROUP_WIDTH: usize = 5;
/// Continuation flag inside a literal group.
pub const GROUP_CONTINUE: u64 = 0x10;
/// Width of an operator's total-bit-length field (length type 0).
pub const TOTAL_BITS_WIDTH: usize = 15;
/// Width of an operator's sub-packet-count field (length type 1).
pub const SUB_COUNT_WIDTH: usize = 11;
