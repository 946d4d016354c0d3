//! Recursive descent parser for Lox.
//!
//! One method per precedence level, from `declaration` down to `primary`.
//! Errors never abort the parse: a failed statement is dropped, its error
//! recorded, and the cursor synchronized to the next statement boundary.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ErrorLocation, ParseError};
pub use recovery::{synchronize, TokenSet, STMT_START};

use lox_ir::{Stmt, StringInterner, TokenList};
use tracing::{debug, trace};

/// Statements that parsed, plus every error found, in source order.
///
/// A statement that failed to parse is absent from `statements`; the
/// caller decides whether to run anything when `errors` is non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Errors that did not unwind a statement (invalid assignment targets)
    /// are recorded here directly, alongside recovered ones.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
        }
    }

    /// Parse every declaration up to `Eof`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration_with_recovery() {
                statements.push(stmt);
            }
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Parse one declaration; on failure record the error and resync.
    fn declaration_with_recovery(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(stmt) => {
                trace!(kind = stmt_kind_name(&stmt), line = self.cursor.previous().line, "declaration");
                Some(stmt)
            }
            Err(error) => {
                trace!(%error, "recovering from parse error");
                self.errors.push(error);
                synchronize(&mut self.cursor, STMT_START);
                None
            }
        }
    }

    /// Record an error without unwinding the current statement.
    fn report(&mut self, error: ParseError) {
        trace!(%error, "reported parse error");
        self.errors.push(error);
    }
}

fn stmt_kind_name(stmt: &Stmt) -> &'static str {
    match stmt.kind {
        lox_ir::StmtKind::Expression(_) => "expression",
        lox_ir::StmtKind::Print(_) => "print",
        lox_ir::StmtKind::Var { .. } => "var",
    }
}

/// Parse a token list into statements.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
mod tests;
