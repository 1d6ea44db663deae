//! Lexer errors.

/// Lexing failure, positioned at the byte offset where it occurred.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character no token starts with.
    #[error("unexpected character '{}' at position {pos}", .ch.escape_debug())]
    UnexpectedChar { ch: char, pos: u32 },

    /// A number literal too large for a finite `f64`.
    #[error("number literal `{literal}` at position {pos} is out of range")]
    NumberOutOfRange { literal: String, pos: u32 },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn pos(&self) -> u32 {
        match self {
            Self::UnexpectedChar { pos, .. } | Self::NumberOutOfRange { pos, .. } => *pos,
        }
    }
}
