//! Expression parsing, one method per precedence level.
//!
//! Binary levels loop, building left-leaning trees; assignment and unary
//! recurse, making them right-associative.

use lox_diagnostic::ErrorCode;
use lox_ir::{BinaryOp, Expr, ExprKind, Literal, Token, TokenKind, UnaryOp};
use lox_stack::ensure_sufficient_stack;

use crate::recovery::TokenSet;
use crate::{ParseError, Parser};

const EQUALITY: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

const COMPARISON: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const TERM: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

const FACTOR: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

type Level<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;

impl<'a> Parser<'a> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// `target = value`.
    ///
    /// The left side is parsed as an ordinary expression first. A non-
    /// variable target is reported without unwinding: the cursor is still
    /// in a well-formed position, so the left side stands as the value.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.equality()?;

        let Some(equals) = self.cursor.eat(&TokenKind::Equal) else {
            return Ok(expr);
        };
        let value = self.expression()?;

        if let ExprKind::Variable { name } = &expr.kind {
            let name = *name;
            let span = expr.span.merge(value.span);
            return Ok(Expr::new(
                ExprKind::Assign {
                    name,
                    value: Box::new(value),
                },
                span,
            ));
        }

        let error = self
            .cursor
            .error_at(&equals, ErrorCode::E1004, "Invalid assignment target.");
        self.report(error);
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(EQUALITY, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(COMPARISON, Self::term)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(TERM, Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(FACTOR, Self::unary)
    }

    /// `operand ( op operand )*`, folded to the left.
    fn binary_level(&mut self, ops: TokenSet, operand: Level<'a>) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while let Some((op, operator)) = self.eat_binary_op(ops) {
            let right = operand(self)?;
            let span = expr.span.merge(right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    fn eat_binary_op(&mut self, ops: TokenSet) -> Option<(BinaryOp, Token)> {
        if !self.cursor.check_any(ops) {
            return None;
        }
        let op = BinaryOp::from_token(self.cursor.current_kind())?;
        Some((op, self.cursor.advance()))
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = UnaryOp::from_token(self.cursor.current_kind()) {
            let operator = self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.unary())?;
            let span = operator.span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operator,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = *self.cursor.current();
        let literal = match token.kind {
            TokenKind::False => Literal::Bool(false),
            TokenKind::True => Literal::Bool(true),
            TokenKind::Nil => Literal::Nil,
            TokenKind::Number(_) => Literal::Number(token.kind.as_number().unwrap_or_default()),
            TokenKind::String(contents) => Literal::Str(contents),
            TokenKind::Identifier(_) => {
                self.cursor.advance();
                return Ok(Expr::new(ExprKind::Variable { name: token }, token.span));
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                let close = self.cursor.expect(
                    &TokenKind::RightParen,
                    ErrorCode::E1001,
                    "Expect ')' after expression.",
                )?;
                return Ok(Expr::new(
                    ExprKind::Grouping(Box::new(inner)),
                    token.span.merge(close.span),
                ));
            }
            _ => {
                return Err(self
                    .cursor
                    .error_at_current(ErrorCode::E1002, "Expect expression."));
            }
        };
        self.cursor.advance();
        Ok(Expr::new(ExprKind::Literal(literal), token.span))
    }
}
