//! Statement types.

use super::Expr;
use crate::{Span, Token};

/// A statement with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `expr;` - evaluated, value discarded.
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name = initializer;` - a missing initializer declares `nil`.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
}
