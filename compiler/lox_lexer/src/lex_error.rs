//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

/// A scanning failure. Scanning continues past it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line where the error was detected.
    pub line: u32,
    pub span: Span,
}

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"`; the string ran to end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter { found: char },
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, line: u32, span: Span) -> Self {
        LexError { kind, line, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_line(self.line);
        match self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::point(self.span.start), "string starts here")
                .with_note("strings end at the next `\"`, which was never found"),
            LexErrorKind::UnexpectedCharacter { found } => {
                diag.with_label(self.span, format!("`{}` is not valid here", found.escape_default()))
            }
        }
    }
}
