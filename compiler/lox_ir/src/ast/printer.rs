//! Prefix-form rendering of syntax trees.
//!
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`, making precedence and
//! associativity visible. Used by `lox parse` and by parser tests.

use std::fmt::Write;

use lox_stack::ensure_sufficient_stack;

use super::{Expr, ExprKind, Literal, Stmt, StmtKind};
use crate::{format_number, StringInterner};

/// Render an expression in prefix form.
pub fn expr_to_string(expr: &Expr, interner: &StringInterner) -> String {
    let mut printer = AstPrinter {
        interner,
        out: String::new(),
    };
    printer.expr(expr);
    printer.out
}

/// Render a statement in prefix form.
pub fn stmt_to_string(stmt: &Stmt, interner: &StringInterner) -> String {
    let mut printer = AstPrinter {
        interner,
        out: String::new(),
    };
    printer.stmt(stmt);
    printer.out
}

struct AstPrinter<'a> {
    interner: &'a StringInterner,
    out: String,
}

impl AstPrinter<'_> {
    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expression(expr) => self.parenthesize(";", &[expr]),
            StmtKind::Print(expr) => self.parenthesize("print", &[expr]),
            StmtKind::Var { name, initializer } => {
                let name = self.interner.lookup(name.lexeme);
                self.out.push_str("(var ");
                self.out.push_str(name);
                if let Some(init) = initializer {
                    self.out.push(' ');
                    self.expr(init);
                }
                self.out.push(')');
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(lit) => self.literal(*lit),
            ExprKind::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            ExprKind::Unary { op, operand, .. } => self.parenthesize(op.as_symbol(), &[&**operand]),
            ExprKind::Binary {
                left, op, right, ..
            } => self.parenthesize(op.as_symbol(), &[&**left, &**right]),
            ExprKind::Variable { name } => {
                self.out.push_str(self.interner.lookup(name.lexeme));
            }
            ExprKind::Assign { name, value } => {
                let name = self.interner.lookup(name.lexeme);
                let _ = write!(self.out, "(= {name} ");
                self.expr(value);
                self.out.push(')');
            }
        }
    }

    fn literal(&mut self, lit: Literal) {
        match lit {
            Literal::Number(n) => self.out.push_str(&format_number(n)),
            Literal::Str(name) => {
                let _ = write!(self.out, "\"{}\"", self.interner.lookup(name));
            }
            Literal::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            Literal::Nil => self.out.push_str("nil"),
        }
    }

    fn parenthesize(&mut self, head: &str, exprs: &[&Expr]) {
        self.out.push('(');
        self.out.push_str(head);
        for expr in exprs {
            self.out.push(' ');
            self.expr(expr);
        }
        self.out.push(')');
    }
}
