//! Parse error types.

use calc_ir::Span;
use calc_lexer::LexError;

/// Why an expression could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot continue the expression at this point: a stray
    /// `)`, an operator with no left operand, or anything after a complete
    /// expression.
    #[error("unexpected token `{found}` at position {}", .span.start)]
    UnexpectedToken { found: String, span: Span },

    /// Input ended while an operand or `)` was still required.
    #[error("unexpected end of input at position {pos}")]
    UnexpectedEnd { pos: u32 },

    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// Byte offset the error points at.
    pub fn pos(&self) -> u32 {
        match self {
            Self::UnexpectedToken { span, .. } => span.start,
            Self::UnexpectedEnd { pos } => *pos,
            Self::Lex(err) => err.pos(),
        }
    }
}
