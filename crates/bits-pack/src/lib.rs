//! `bits-pack` — decoder, encoder and expression evaluator for the BITS
//! transmission protocol.
//!
//! A BITS transmission is a hex string whose bits hold one packet. A packet
//! carries either a literal value or an operator applied to nested
//! sub-packets, each operator framed by one of two length encodings (a
//! 15-bit total bit length or an 11-bit sub-packet count). Decoding yields
//! an owning [`Packet`] tree; [`version_sum`] and [`evaluate`] fold over it.
//!
//! # Example
//!
//! ```
//! use bits_pack::{evaluate, version_sum, BitsDecoder};
//!
//! let decoder = BitsDecoder::new();
//! let packet = decoder.decode_hex("C200B40A82").unwrap();
//!
//! assert_eq!(version_sum(&packet), 10);
//! assert_eq!(evaluate(&packet).unwrap(), 3);
//! ```

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod evaluate;
pub mod packet;

pub use decoder::BitsDecoder;
pub use encoder::BitsEncoder;
pub use error::{DecodeError, EncodeError, EvalError};
pub use evaluate::{evaluate, version_sum};
pub use packet::{LengthEncoding, Op, Packet};
