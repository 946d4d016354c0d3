//! Expression and statement trees.
//!
//! Each category is a closed enum: the parser produces every variant and
//! the interpreter matches exhaustively, so adding a variant is a compile
//! error until both sides handle it.
//!
//! Trees are strictly owned: a composite node exclusively owns its
//! children through `Box`, with no sharing and no cycles.
//!
//! # Module Structure
//!
//! - `expr`: `Expr`, `ExprKind`, `Literal`
//! - `operators`: unary and binary operators
//! - `stmt`: `Stmt`, `StmtKind`
//! - `printer`: prefix-form rendering used by `lox parse`

mod expr;
mod operators;
mod printer;
mod stmt;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use printer::{expr_to_string, stmt_to_string};
pub use stmt::{Stmt, StmtKind};
