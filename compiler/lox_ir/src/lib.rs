//! Lox IR - tokens and syntax trees shared by every phase.
//!
//! This crate contains the core data structures of the interpreter:
//! - Spans for source locations
//! - Names for interned identifiers and string literal contents
//! - Tokens and `TokenList` for scanner output
//! - Expression and statement trees (`Expr`, `Stmt`)
//! - A prefix-form printer for those trees
//!
//! Token kinds store numbers as `u64` bits so tokens stay `Eq + Hash`.
//! Strings are interned `Name`s so tokens stay `Copy`.

pub mod ast;
mod interner;
mod name;
mod number;
mod span;
mod token;

pub use ast::{
    expr_to_string, stmt_to_string, BinaryOp, Expr, ExprKind, Literal, Stmt, StmtKind, UnaryOp,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use number::format_number;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
