//! Lexer for calculator expressions.
//!
//! [`lex`] returns a lazy [`Lexer`] over the source. Tokens are produced on
//! demand as the parser pulls them; the stream always ends with exactly one
//! [`TokenKind::Eof`] (or stops at the first [`LexError`]). Restarting means
//! calling [`lex`] again, or cloning a lexer before advancing it.

use calc_ir::Span;
use logos::Logos;

mod error;

pub use error::LexError;

/// Why logos rejected a slice. Converted to a positioned [`LexError`] by
/// [`Lexer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token pattern matches the next character.
    #[default]
    UnexpectedChar,
    /// A number literal whose value does not fit in a finite `f64`.
    NumberOutOfRange,
}

/// Token kinds.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    // Literals: `12`, `12.`, `12.5`, `.5`
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    /// End of input. Never matched by a pattern; appended by [`Lexer`].
    Eof,
}

fn parse_number(lex: &mut logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexErrorKind::NumberOutOfRange),
    }
}

impl TokenKind {
    /// Short human-readable name, for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Eof => "end of input",
        }
    }
}

/// A token and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lazy token stream over one expression.
///
/// Yields `Ok` tokens up to and including a single `Eof`, or stops after the
/// first `Err`. Exhausted afterwards.
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: TokenKind::lexer(source),
            source,
            done: false,
        }
    }

    /// The text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        let range = self.inner.span();
        let pos = Span::from_range(range.clone()).start;
        match kind {
            LexErrorKind::UnexpectedChar => LexError::UnexpectedChar {
                ch: self.source[range.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                pos,
            },
            LexErrorKind::NumberOutOfRange => LexError::NumberOutOfRange {
                literal: self.inner.slice().to_owned(),
                pos,
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Ok(Token::new(kind, Span::from_range(self.inner.span())))),
            Some(Err(kind)) => {
                self.done = true;
                Some(Err(self.error(kind)))
            }
            None => {
                self.done = true;
                let end = self.source.len();
                Some(Ok(Token::new(TokenKind::Eof, Span::from_range(end..end))))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Start lexing `source` from the beginning.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex all of `source` eagerly. The returned tokens end with `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lex(source).collect()
}
