//! Tree-walking interpreter for Lox.
//!
//! - `Value`: runtime values (nil, booleans, numbers, strings)
//! - `Environment`: arena of scope frames linked to their enclosing frame
//! - `Interpreter`: executes statements against one environment
//! - `evaluate_binary` / `evaluate_unary`: operator semantics, independent
//!   of tree walking
//! - Print handlers decide where `print` output goes

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, ScopeError, ScopeId};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
