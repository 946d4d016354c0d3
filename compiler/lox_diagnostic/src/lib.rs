//! Diagnostic system for error reporting.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - Error codes for searchability (`lox explain E1004`)
//! - A message saying what went wrong
//! - The source line, plus labeled spans when the phase has them
//! - Notes for extra context
//!
//! Phases keep their own typed errors (`LexError`, `ParseError`,
//! `EvalError`) and convert at the boundary to the driver.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError, Phase};
pub use errors::ErrorDocs;
pub use queue::DiagnosticQueue;
