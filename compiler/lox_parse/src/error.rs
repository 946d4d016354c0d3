//! Parse error types.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, StringInterner, Token};

/// Where a parse error points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorLocation {
    /// The error is at the `Eof` token.
    AtEnd,
    /// The error is at a token with this source text.
    AtLexeme(String),
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::AtLexeme(text) => write!(f, " at '{text}'"),
        }
    }
}

/// A parse error.
///
/// Displays in the classic one-line form:
/// `[line 1] Error at '=': Invalid assignment target.`
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line of the offending token.
    pub line: u32,
    pub location: ErrorLocation,
    pub span: Span,
}

impl ParseError {
    /// Build an error pointing at `token`.
    #[cold]
    pub fn at_token(
        code: ErrorCode,
        message: impl Into<String>,
        token: &Token,
        interner: &StringInterner,
    ) -> Self {
        let location = if token.is_eof() {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::AtLexeme(interner.lookup(token.lexeme).to_string())
        };
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            location,
            span: token.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.location {
            ErrorLocation::AtEnd => "input ends here".to_string(),
            ErrorLocation::AtLexeme(text) => format!("found '{text}'"),
        };
        let diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_line(self.line)
            .with_label(self.span, label);
        match self.code {
            ErrorCode::E1004 => diag.with_note("only a variable name can appear left of `=`"),
            _ => diag,
        }
    }
}
