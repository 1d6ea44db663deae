//! Recursive descent parser for calculator expressions.
//!
//! Grammar (left-associative, `*` `/` bind tighter than `+` `-`):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | NUMBER | '(' expr ')'
//! ```
//!
//! Tokens are pulled from the lexer one at a time, so a lexing error surfaces
//! as [`ParseError::Lex`] only when the parser reaches it.

mod cursor;
mod error;
mod grammar;
mod sexpr;

use calc_ir::{ExprArena, ParsedExpr};
use calc_lexer::TokenKind;
use tracing::debug;

use cursor::Cursor;

pub use error::ParseError;
pub use sexpr::to_sexpr;

/// Parser state: token cursor plus the arena being filled.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    arena: ExprArena,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned at the first token of `source`.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
            arena: ExprArena::new(),
        })
    }

    /// Parse one complete expression. Anything after it is an error.
    pub fn parse(mut self) -> Result<ParsedExpr, ParseError> {
        let root = self.parse_expr()?;
        if !self.cursor.check(TokenKind::Eof) {
            return Err(self.cursor.unexpected());
        }
        let parsed = ParsedExpr {
            arena: self.arena,
            root,
        };
        debug!(nodes = parsed.arena.len(), tree = %to_sexpr(&parsed), "parsed expression");
        Ok(parsed)
    }
}

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    Parser::new(source)?.parse()
}
