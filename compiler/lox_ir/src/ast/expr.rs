//! Expression types.

use super::{BinaryOp, UnaryOp};
use crate::{Name, Span, Token};

/// A constant decoded by the scanner or spelled as a keyword.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    /// String contents, interned.
    Str(Name),
    Bool(bool),
    Nil,
}

/// An expression with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
///
/// Operator nodes keep their operator token so runtime failures can
/// report the operator's line.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    /// Parenthesized sub-expression.
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operator: Token,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },
    /// Variable read.
    Variable { name: Token },
    /// Variable write; evaluates to the assigned value.
    Assign { name: Token, value: Box<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Stand-in left behind when a child is moved out during drop.
    #[inline]
    fn placeholder() -> Self {
        Expr::new(ExprKind::Literal(Literal::Nil), Span::DUMMY)
    }
}

impl ExprKind {
    #[inline]
    fn is_leaf(&self) -> bool {
        matches!(self, ExprKind::Literal(_) | ExprKind::Variable { .. })
    }

    /// Move every direct child into `out`, leaving placeholders behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            ExprKind::Grouping(inner)
            | ExprKind::Unary { operand: inner, .. }
            | ExprKind::Assign { value: inner, .. } => {
                out.push(std::mem::replace(&mut **inner, Expr::placeholder()));
            }
            ExprKind::Binary { left, right, .. } => {
                out.push(std::mem::replace(&mut **left, Expr::placeholder()));
                out.push(std::mem::replace(&mut **right, Expr::placeholder()));
            }
            ExprKind::Literal(_) | ExprKind::Variable { .. } => {}
        }
    }
}

/// Iterative teardown.
///
/// The derived drop glue would recurse once per nesting level, which
/// overflows on the deeply nested inputs the parser accepts.
impl Drop for Expr {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.kind.take_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.kind.take_children(&mut pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    fn bang() -> Token {
        Token::new(TokenKind::Bang, Name::EMPTY, 1, Span::new(0, 1))
    }

    #[test]
    fn test_drop_deeply_nested_tree() {
        let mut expr = Expr::new(ExprKind::Literal(Literal::Bool(true)), Span::DUMMY);
        for _ in 0..500_000 {
            expr = Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operator: bang(),
                    operand: Box::new(expr),
                },
                Span::DUMMY,
            );
        }
        drop(expr);
    }

    #[test]
    fn test_clone_preserves_structure() {
        let expr = Expr::new(
            ExprKind::Grouping(Box::new(Expr::new(
                ExprKind::Literal(Literal::Number(1.0)),
                Span::new(1, 2),
            ))),
            Span::new(0, 3),
        );
        assert_eq!(expr.clone(), expr);
    }
}
