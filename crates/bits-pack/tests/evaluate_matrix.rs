use bits_pack::{evaluate, BitsDecoder, EvalError, LengthEncoding, Op, Packet};

fn eval_hex(hex: &str) -> u128 {
    let packet = BitsDecoder::new()
        .decode_hex(hex)
        .unwrap_or_else(|e| panic!("decode({hex}) failed: {e}"));
    evaluate(&packet).unwrap_or_else(|e| panic!("evaluate({hex}) failed: {e}"))
}

fn literal(value: u128) -> Packet {
    Packet::Literal { version: 0, value }
}

fn operator(op: Op, children: Vec<Packet>) -> Packet {
    Packet::Operator {
        version: 0,
        op,
        length: LengthEncoding::SubPacketCount,
        children,
    }
}

#[test]
fn expression_matrix() {
    for (hex, expected) in [
        ("C200B40A82", 3),                 // 1 + 2
        ("04005AC33890", 54),              // 6 * 9
        ("880086C3E88112", 7),             // min(7, 8, 9)
        ("CE00C43D881120", 9),             // max(7, 8, 9)
        ("D8005AC2A8F0", 1),               // 5 < 15
        ("F600BC2D8F", 0),                 // 5 > 15
        ("9C005AC2F8F0", 0),               // 5 == 15
        ("9C0141080250320F1802104A08", 1), // 1 + 3 == 2 * 2
    ] {
        assert_eq!(eval_hex(hex), expected, "transmission {hex}");
    }
}

#[test]
fn literal_evaluates_to_its_value() {
    assert_eq!(eval_hex("D2FE28"), 2021);
}

#[test]
fn literal_zero_evaluates_to_zero() {
    assert_eq!(eval_hex("1000"), 0);
}

#[test]
fn single_operand_aggregates() {
    assert_eq!(evaluate(&operator(Op::Sum, vec![literal(7)])).unwrap(), 7);
    assert_eq!(evaluate(&operator(Op::Product, vec![literal(7)])).unwrap(), 7);
    assert_eq!(evaluate(&operator(Op::Min, vec![literal(7)])).unwrap(), 7);
    assert_eq!(evaluate(&operator(Op::Max, vec![literal(7)])).unwrap(), 7);
}

#[test]
fn aggregate_without_operands_is_rejected() {
    for op in [Op::Sum, Op::Product, Op::Min, Op::Max] {
        assert_eq!(
            evaluate(&operator(op, vec![])),
            Err(EvalError::NoOperands(op)),
            "operator {op:?}"
        );
    }
}

#[test]
fn comparison_arity_is_exactly_two() {
    for op in [Op::GreaterThan, Op::LessThan, Op::EqualTo] {
        for arity in [0usize, 1, 3] {
            let children = (0..arity).map(|i| literal(i as u128)).collect();
            assert_eq!(
                evaluate(&operator(op, children)),
                Err(EvalError::ComparisonArity { op, arity }),
                "operator {op:?} arity {arity}"
            );
        }
    }
}

#[test]
fn comparisons_yield_zero_or_one() {
    let cases = [
        (Op::GreaterThan, 2, 1, 1),
        (Op::GreaterThan, 1, 2, 0),
        (Op::LessThan, 1, 2, 1),
        (Op::LessThan, 2, 1, 0),
        (Op::EqualTo, 2, 2, 1),
        (Op::EqualTo, 2, 1, 0),
    ];
    for (op, lhs, rhs, expected) in cases {
        assert_eq!(
            evaluate(&operator(op, vec![literal(lhs), literal(rhs)])).unwrap(),
            expected,
            "{lhs} {op:?} {rhs}"
        );
    }
}

#[test]
fn sum_overflow_is_reported() {
    let tree = operator(Op::Sum, vec![literal(u128::MAX), literal(1)]);
    assert_eq!(evaluate(&tree), Err(EvalError::Overflow));
}

#[test]
fn product_overflow_is_reported() {
    let tree = operator(Op::Product, vec![literal(1 << 64), literal(1 << 64)]);
    assert_eq!(evaluate(&tree), Err(EvalError::Overflow));
}

#[test]
fn errors_propagate_out_of_nested_trees() {
    let tree = operator(
        Op::Sum,
        vec![literal(1), operator(Op::Min, vec![]), literal(2)],
    );
    assert_eq!(evaluate(&tree), Err(EvalError::NoOperands(Op::Min)));
}
