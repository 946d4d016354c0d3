//! Unary and binary operators.

use crate::TokenKind;

/// Binary operators, grouped by precedence level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Term
    Sub,
    Add,

    // Factor
    Div,
    Mul,
}

impl BinaryOp {
    /// Source-level symbol, used by the AST printer.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Sub => "-",
            Self::Add => "+",
            Self::Div => "/",
            Self::Mul => "*",
        }
    }

    /// Operator for a token kind, if the token spells one.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::NotEq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::GtEq,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::LtEq,
            TokenKind::Minus => Self::Sub,
            TokenKind::Plus => Self::Add,
            TokenKind::Slash => Self::Div,
            TokenKind::Star => Self::Mul,
            _ => return None,
        };
        Some(op)
    }

    /// `==` and `!=` are defined for every pair of values.
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical not (`!`).
    Not,
    /// Arithmetic negation (`-`).
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }

    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Neg),
            _ => None,
        }
    }
}
