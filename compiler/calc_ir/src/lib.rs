//! Calculator IR - shared types for the evaluation pipeline.
//!
//! This crate contains the data structures passed between the lexer, parser
//! and evaluator:
//! - Spans for source locations
//! - Binary and unary operators
//! - Arena allocation for expression nodes
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: No `Box<Expr>`, children are `ExprId(u32)` indices
//!   into an [`ExprArena`]. Dropping a tree is a single `Vec` drop no matter
//!   how deep it nests.
//! - **Children First**: a node is only allocated after its operands, so every
//!   id stored in a node points to an earlier slot and the tree is acyclic.

mod arena;
mod operators;
mod span;

pub use arena::{Expr, ExprArena, ExprId, ExprKind, ParsedExpr};
pub use operators::{BinaryOp, UnaryOp};
pub use span::Span;
