//! Grammar productions, split by tree category.
//!
//! ```text
//! declaration := "var" IDENTIFIER ( "=" expression )? ";" | statement
//! statement   := "print" expression ";" | expression ";"
//! expression  := assignment
//! assignment  := equality ( "=" assignment )?
//! equality    := comparison ( ( "!=" | "==" ) comparison )*
//! comparison  := term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        := factor ( ( "-" | "+" ) factor )*
//! factor      := unary ( ( "/" | "*" ) unary )*
//! unary       := ( "!" | "-" ) unary | primary
//! primary     := NUMBER | STRING | "true" | "false" | "nil"
//!              | IDENTIFIER | "(" expression ")"
//! ```

mod expr;
mod stmt;
