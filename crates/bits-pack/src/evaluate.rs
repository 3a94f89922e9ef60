//! The two read-only traversals over a decoded packet tree.

use crate::error::EvalError;
use crate::packet::{Op, Packet};

/// Sums the version field of every packet in the tree.
///
/// Total over any tree; used as a checksum-like diagnostic of a decoded
/// transmission.
pub fn version_sum(packet: &Packet) -> u64 {
    match packet {
        Packet::Literal { version, .. } => *version as u64,
        Packet::Operator {
            version, children, ..
        } => *version as u64 + children.iter().map(version_sum).sum::<u64>(),
    }
}

/// Evaluates the tree as an arithmetic/comparison expression.
///
/// Branches on the packet's kind, never on the value itself, so a literal
/// zero evaluates to zero. Comparisons yield 1 or 0.
pub fn evaluate(packet: &Packet) -> Result<u128, EvalError> {
    let (op, children) = match packet {
        Packet::Literal { value, .. } => return Ok(*value),
        Packet::Operator { op, children, .. } => (*op, children),
    };
    let values = children
        .iter()
        .map(evaluate)
        .collect::<Result<Vec<_>, _>>()?;
    match op {
        Op::Sum => {
            require_operands(op, &values)?;
            values
                .iter()
                .try_fold(0u128, |acc, &v| acc.checked_add(v).ok_or(EvalError::Overflow))
        }
        Op::Product => {
            require_operands(op, &values)?;
            values
                .iter()
                .try_fold(1u128, |acc, &v| acc.checked_mul(v).ok_or(EvalError::Overflow))
        }
        Op::Min => values.iter().copied().min().ok_or(EvalError::NoOperands(op)),
        Op::Max => values.iter().copied().max().ok_or(EvalError::NoOperands(op)),
        Op::GreaterThan | Op::LessThan | Op::EqualTo => {
            let &[lhs, rhs] = values.as_slice() else {
                return Err(EvalError::ComparisonArity {
                    op,
                    arity: values.len(),
                });
            };
            let hit = match op {
                Op::GreaterThan => lhs > rhs,
                Op::LessThan => lhs < rhs,
                _ => lhs == rhs,
            };
            Ok(hit as u128)
        }
    }
}

fn require_operands(op: Op, values: &[u128]) -> Result<(), EvalError> {
    if values.is_empty() {
        Err(EvalError::NoOperands(op))
    } else {
        Ok(())
    }
}
