//! S-expression rendering of a parsed tree: `1 - 2 * 3` becomes
//! `(- 1 (* 2 3))`. Makes grouping explicit for logs and tests.

use std::fmt::Write;

use calc_ir::{ExprArena, ExprId, ExprKind, ParsedExpr};
use calc_stack::ensure_sufficient_stack;

/// Render `parsed` as a fully parenthesized prefix expression.
pub fn to_sexpr(parsed: &ParsedExpr) -> String {
    let mut out = String::new();
    write_node(&parsed.arena, parsed.root, &mut out);
    out
}

fn write_node(arena: &ExprArena, id: ExprId, out: &mut String) {
    ensure_sufficient_stack(|| match arena[id].kind {
        ExprKind::Literal(value) => {
            let _ = write!(out, "{value}");
        }
        ExprKind::Unary { op, operand } => {
            out.push('(');
            out.push_str(op.as_symbol());
            out.push(' ');
            write_node(arena, operand, out);
            out.push(')');
        }
        ExprKind::Binary { op, left, right } => {
            out.push('(');
            out.push_str(op.as_symbol());
            out.push(' ');
            write_node(arena, left, out);
            out.push(' ');
            write_node(arena, right, out);
            out.push(')');
        }
    })
}
