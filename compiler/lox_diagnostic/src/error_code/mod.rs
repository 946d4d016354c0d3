//! Error codes for all interpreter diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase that reported it. Used for `lox explain` lookups.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,
    /// Invalid assignment target
    E1004,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Operand must be a number
    E6002,
    /// Operands must be numbers
    E6003,
    /// Operands of `+` must be two numbers or two strings
    E6004,
}

/// Phase that reports a given error code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Runtime,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lexer => write!(f, "lexer"),
            Phase::Parser => write!(f, "parser"),
            Phase::Runtime => write!(f, "runtime"),
        }
    }
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
        }
    }

    /// One-line title, used in `lox explain` listings.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E1001 => "expected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected identifier",
            ErrorCode::E1004 => "invalid assignment target",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "operand must be a number",
            ErrorCode::E6003 => "operands must be numbers",
            ErrorCode::E6004 => "invalid operands to `+`",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => Phase::Lexer,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004 => {
                Phase::Parser
            }
            ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003 | ErrorCode::E6004 => {
                Phase::Runtime
            }
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.phase() == Phase::Lexer
    }

    pub fn is_parser_error(&self) -> bool {
        self.phase() == Phase::Parser
    }

    pub fn is_runtime_error(&self) -> bool {
        self.phase() == Phase::Runtime
    }

    /// Lexer and parser errors stop a program before it runs.
    pub fn is_static_error(&self) -> bool {
        !self.is_runtime_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name an error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError {
    pub input: String,
}

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.input)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl std::str::FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Accepts `E1004` and `e1004`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseErrorCodeError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests;
