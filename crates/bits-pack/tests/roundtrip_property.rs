use bits_pack::{version_sum, BitsDecoder, BitsEncoder, LengthEncoding, Op, Packet};
use proptest::prelude::*;

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Sum),
        Just(Op::Product),
        Just(Op::Min),
        Just(Op::Max),
        Just(Op::GreaterThan),
        Just(Op::LessThan),
        Just(Op::EqualTo),
    ]
}

fn arb_length() -> impl Strategy<Value = LengthEncoding> {
    prop_oneof![
        Just(LengthEncoding::TotalBits),
        Just(LengthEncoding::SubPacketCount),
    ]
}

fn arb_packet() -> impl Strategy<Value = Packet> {
    let leaf = (0u8..8, any::<u64>())
        .prop_map(|(version, value)| Packet::Literal {
            version,
            value: value as u128,
        });
    leaf.prop_recursive(4, 24, 4, |inner| {
        (
            0u8..8,
            arb_op(),
            arb_length(),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(version, op, length, children)| Packet::Operator {
                version,
                op,
                length,
                children,
            })
    })
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(packet in arb_packet()) {
        let hex = BitsEncoder::new()
            .encode_hex(&packet)
            .expect("generated trees fit the wire length fields");
        let decoded = BitsDecoder::new().decode_hex(&hex).unwrap();
        prop_assert_eq!(decoded, packet);
    }

    #[test]
    fn version_sum_matches_explicit_traversal(packet in arb_packet()) {
        let mut total = 0u64;
        let mut stack = vec![&packet];
        while let Some(node) = stack.pop() {
            total += node.version() as u64;
            if let Packet::Operator { children, .. } = node {
                stack.extend(children.iter());
            }
        }
        prop_assert_eq!(version_sum(&packet), total);
    }
}
