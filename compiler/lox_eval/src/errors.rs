//! Runtime errors.
//!
//! A runtime error aborts the rest of the current run. Each one carries
//! the line of the token that triggered it: the operator for type
//! errors, the identifier for undefined variables.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, Token};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    /// Unary `-` applied to a non-number.
    #[error("Operand must be a number.")]
    OperandNotNumber { found: &'static str },

    /// Arithmetic or comparison with a non-number on either side.
    #[error("Operands must be numbers.")]
    OperandsNotNumbers {
        left: &'static str,
        right: &'static str,
    },

    /// `+` on anything other than two numbers or two strings.
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddOperands {
        left: &'static str,
        right: &'static str,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::OperandNotNumber { .. } => ErrorCode::E6002,
            EvalErrorKind::OperandsNotNumbers { .. } => ErrorCode::E6003,
            EvalErrorKind::InvalidAddOperands { .. } => ErrorCode::E6004,
        }
    }

    /// Attach the location of the offending token.
    pub fn at(self, token: &Token) -> EvalError {
        EvalError::new(self, token)
    }
}

/// A runtime error with its location.
///
/// Display is the message followed by `[line N]` on its own line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
    pub span: Span,
}

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

impl EvalError {
    pub fn new(kind: EvalErrorKind, token: &Token) -> Self {
        EvalError {
            kind,
            line: token.line,
            span: token.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Type errors are the operand-kind failures; everything else is a
    /// name error.
    pub fn is_type_error(&self) -> bool {
        !matches!(self.kind, EvalErrorKind::UndefinedVariable { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_line(self.line);
        match &self.kind {
            EvalErrorKind::UndefinedVariable { name } => diag
                .with_label(self.span, format!("`{name}` is not defined"))
                .with_note("declare it first with `var`"),
            EvalErrorKind::OperandNotNumber { found } => {
                diag.with_label(self.span, format!("operand is {}", with_article(found)))
            }
            EvalErrorKind::OperandsNotNumbers { left, right }
            | EvalErrorKind::InvalidAddOperands { left, right } => diag.with_label(
                self.span,
                format!("operands are {} and {}", with_article(left), with_article(right)),
            ),
        }
    }
}

fn with_article(kind: &str) -> String {
    match kind {
        "nil" => "nil".to_string(),
        _ => format!("a {kind}"),
    }
}
