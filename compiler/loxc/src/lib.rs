//! Lox interpreter driver.
//!
//! Wires the phases together: scan, parse, and (only when both were
//! clean) interpret. The `lox` binary is a thin layer over this crate:
//! - [`run`]: one pass over a source string, returning diagnostics and
//!   an exit status
//! - [`Session`]: the interactive prompt
//! - [`Config`]: command-line parsing
//! - [`commands`]: the handlers behind each subcommand

pub mod commands;
mod config;
mod pipeline;
mod session;
pub mod tracing_setup;

pub use config::{Command, Config, ConfigError};
pub use pipeline::{run, RunOutcome, RunStatus};
pub use session::Session;

/// Exit code for command-line usage errors.
pub const EXIT_USAGE: u8 = 64;
