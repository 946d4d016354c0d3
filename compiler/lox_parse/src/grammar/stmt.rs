//! Declarations and statements.

use lox_diagnostic::ErrorCode;
use lox_ir::{Stmt, StmtKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if let Some(var) = self.cursor.eat(&TokenKind::Var) {
            return self.var_declaration(var.span);
        }
        self.statement()
    }

    /// `var` has been consumed; `start` is its span.
    fn var_declaration(&mut self, start: lox_ir::Span) -> Result<Stmt, ParseError> {
        let name = self.cursor.expect(
            &TokenKind::Identifier(lox_ir::Name::EMPTY),
            ErrorCode::E1003,
            "Expect variable name.",
        )?;

        let initializer = if self.cursor.eat(&TokenKind::Equal).is_some() {
            Some(self.expression()?)
        } else {
            None
        };

        let semi = self.cursor.expect(
            &TokenKind::Semicolon,
            ErrorCode::E1001,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::new(
            StmtKind::Var { name, initializer },
            start.merge(semi.span),
        ))
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if let Some(print) = self.cursor.eat(&TokenKind::Print) {
            let value = self.expression()?;
            let semi = self.cursor.expect(
                &TokenKind::Semicolon,
                ErrorCode::E1001,
                "Expect ';' after value.",
            )?;
            return Ok(Stmt::new(StmtKind::Print(value), print.span.merge(semi.span)));
        }

        let expr = self.expression()?;
        let semi = self.cursor.expect(
            &TokenKind::Semicolon,
            ErrorCode::E1001,
            "Expect ';' after expression.",
        )?;
        let span = expr.span.merge(semi.span);
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }
}
