//! Expression arena.
//!
//! Nodes are stored contiguously and addressed by [`ExprId`]. The arena is
//! append-only: `alloc` hands out ids in increasing order and nothing is ever
//! removed, so an id stays valid for the arena's lifetime.

use std::fmt;
use std::ops::Index;

use crate::{BinaryOp, Span, UnaryOp};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Expression node kinds.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Number literal, already decoded by the lexer.
    Literal(f64),
    /// Prefix operator applied to one operand.
    Unary { op: UnaryOp, operand: ExprId },
    /// Infix operator with both operands.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

/// Expression node: kind plus the span it was parsed from.
///
/// For `Binary` and `Unary` nodes the span covers the operator token, which
/// is what diagnostics point at.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Append-only storage for expression nodes.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

#[allow(
    clippy::len_without_is_empty,
    reason = "a finished parse always holds at least the root node"
)]
impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate a node and return its id.
    ///
    /// Node count never exceeds the source length in bytes, and sources
    /// longer than `u32::MAX` are rejected before parsing.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by source length, which is capped at u32::MAX"
    )]
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }
}

impl Index<ExprId> for ExprArena {
    type Output = Expr;

    fn index(&self, id: ExprId) -> &Expr {
        self.get(id)
    }
}

/// A complete parse: the arena and the id of its root node.
#[derive(Clone, PartialEq, Debug)]
pub struct ParsedExpr {
    pub arena: ExprArena,
    pub root: ExprId,
}

impl ParsedExpr {
    /// The root node.
    pub fn root_expr(&self) -> &Expr {
        &self.arena[self.root]
    }
}
