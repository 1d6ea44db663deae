//! Evaluation errors.

use calc_ir::{BinaryOp, Span};

/// Result of evaluating an expression or sub-expression.
pub type EvalResult = Result<f64, EvalError>;

/// Why evaluation stopped. Spans point at the operator token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Right operand of `/` evaluated to `0` or `-0`.
    #[error("division by zero at position {}", .span.start)]
    DivisionByZero { span: Span },

    /// The operation produced an infinite value.
    #[error("arithmetic overflow in `{}` at position {}", .op.as_symbol(), .span.start)]
    Overflow { op: BinaryOp, span: Span },
}

impl EvalError {
    /// Byte offset of the failing operator.
    pub fn pos(&self) -> u32 {
        match self {
            Self::DivisionByZero { span } | Self::Overflow { span, .. } => span.start,
        }
    }
}

/// Division by zero error.
#[cold]
pub(crate) fn division_by_zero(span: Span) -> EvalError {
    EvalError::DivisionByZero { span }
}

/// Overflow error.
#[cold]
pub(crate) fn overflow(op: BinaryOp, span: Span) -> EvalError {
    EvalError::Overflow { op, span }
}
