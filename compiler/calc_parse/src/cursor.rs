//! Token cursor over the lazy lexer.
//!
//! Holds exactly one token of lookahead. Advancing pulls the next token from
//! the lexer, so lexing errors are reported at the point the parser needs
//! the offending token.

use calc_ir::Span;
use calc_lexer::{Lexer, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub(crate) struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = calc_lexer::lex(source);
        let current = Self::pull(&mut lexer)?;
        Ok(Cursor { lexer, current })
    }

    fn pull(lexer: &mut Lexer<'src>) -> Result<Token, ParseError> {
        match lexer.next() {
            Some(token) => Ok(token?),
            // The lexer is only exhausted after `Eof`, which is never advanced past.
            None => {
                let end = lexer.source().len();
                Ok(Token::new(TokenKind::Eof, Span::from_range(end..end)))
            }
        }
    }

    /// The current token.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.current
    }

    /// Check the current token's kind, ignoring number payloads.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(&kind)
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let token = self.current;
        if token.kind != TokenKind::Eof {
            self.current = Self::pull(&mut self.lexer)?;
        }
        trace!(consumed = token.kind.name(), at = token.span.start, "advance");
        Ok(token)
    }

    /// Consume a token of the given kind or fail.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Error for the current token not fitting the grammar.
    pub(crate) fn unexpected(&self) -> ParseError {
        let span = self.current.span;
        match self.current.kind {
            TokenKind::Eof => ParseError::UnexpectedEnd { pos: span.start },
            _ => ParseError::UnexpectedToken {
                found: self
                    .lexer
                    .source()
                    .get(span.to_range())
                    .unwrap_or_default()
                    .to_owned(),
                span,
            },
        }
    }
}
