//! Operator precedence parsing.
//!
//! One method per precedence level, lowest first:
//! additive < multiplicative < unary prefix < primary.
//!
//! Operator nodes take the span of their operator token so that evaluation
//! errors can point at the `/` that divided by zero.

use calc_ir::{BinaryOp, Expr, ExprId, ExprKind, UnaryOp};
use calc_lexer::TokenKind;
use calc_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `expr := term (('+' | '-') term)*`
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let op_span = self.cursor.advance()?.span;
            let right = self.parse_term()?;
            left = self
                .arena
                .alloc(Expr::new(ExprKind::Binary { op, left, right }, op_span));
        }

        Ok(left)
    }

    /// `term := factor (('*' | '/') factor)*`
    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.cursor.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            let op_span = self.cursor.advance()?.span;
            let right = self.parse_factor()?;
            left = self
                .arena
                .alloc(Expr::new(ExprKind::Binary { op, left, right }, op_span));
        }

        Ok(left)
    }

    /// `factor := ('+' | '-') factor | NUMBER | '(' expr ')'`
    ///
    /// Every path back into `parse_expr` passes through here, so this is
    /// where the stack guard sits.
    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_factor_inner())
    }

    fn parse_factor_inner(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Number(value) => {
                self.cursor.advance()?;
                Ok(self
                    .arena
                    .alloc(Expr::new(ExprKind::Literal(value), token.span)))
            }
            TokenKind::Minus | TokenKind::Plus => {
                let op = if token.kind == TokenKind::Minus {
                    UnaryOp::Neg
                } else {
                    UnaryOp::Plus
                };
                self.cursor.advance()?;
                let operand = self.parse_factor()?;
                Ok(self
                    .arena
                    .alloc(Expr::new(ExprKind::Unary { op, operand }, token.span)))
            }
            TokenKind::LParen => {
                trace!(at = token.span.start, "parse_factor -> group");
                self.cursor.advance()?;
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.cursor.unexpected()),
        }
    }
}
