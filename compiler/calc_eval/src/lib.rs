//! Evaluator for parsed calculator expressions.
//!
//! Arithmetic is IEEE-754 `f64` throughout: `114514 / 50` is `2290.28`, not
//! an integer quotient. The two ways evaluation can fail are reported as
//! [`EvalError`] values rather than infinities or NaN:
//!
//! - dividing by an operand that evaluates to zero (either sign)
//! - an operation whose result is not finite
//!
//! [`format_number`] turns a successful result into the text handed back to
//! callers.

mod errors;
mod format;
mod operators;

use calc_ir::{ExprArena, ExprId, ExprKind, ParsedExpr};
use calc_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use errors::{EvalError, EvalResult};
pub use format::{format_number, FRACTION_DIGITS};
pub use operators::{apply_binary, apply_unary};

/// Evaluate a parsed expression.
pub fn evaluate(parsed: &ParsedExpr) -> EvalResult {
    let result = Evaluator::new(&parsed.arena).eval(parsed.root);
    debug!(?result, "evaluated expression");
    result
}

/// Post-order walk over one arena. Holds no state besides the borrow.
struct Evaluator<'a> {
    arena: &'a ExprArena,
}

impl<'a> Evaluator<'a> {
    fn new(arena: &'a ExprArena) -> Self {
        Evaluator { arena }
    }

    fn eval(&self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&self, id: ExprId) -> EvalResult {
        let expr = self.arena[id];
        let value = match expr.kind {
            ExprKind::Literal(value) => value,
            ExprKind::Unary { op, operand } => apply_unary(op, self.eval(operand)?),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                apply_binary(op, left, right, expr.span)?
            }
        };
        trace!(node = id.index(), value, "eval");
        Ok(value)
    }
}
