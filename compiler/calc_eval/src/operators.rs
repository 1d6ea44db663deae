//! Operator semantics on `f64` operands.

use calc_ir::{BinaryOp, Span, UnaryOp};

use crate::errors::{division_by_zero, overflow};
use crate::EvalResult;

/// Apply a binary operator. `span` locates the operator for diagnostics.
#[allow(clippy::float_cmp, reason = "exact zero is the division-by-zero condition")]
pub fn apply_binary(op: BinaryOp, left: f64, right: f64, span: Span) -> EvalResult {
    let value = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            // Matches both +0.0 and -0.0.
            if right == 0.0 {
                return Err(division_by_zero(span));
            }
            left / right
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(overflow(op, span))
    }
}

/// Apply a unary prefix operator. Cannot fail on finite input.
pub fn apply_unary(op: UnaryOp, operand: f64) -> f64 {
    match op {
        UnaryOp::Neg => -operand,
        UnaryOp::Plus => operand,
    }
}
