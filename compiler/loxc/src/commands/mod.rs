//! Command handlers for the `lox` binary.
//!
//! Each handler returns the process exit code; `main` does the exiting.
//! Shared helpers for reading sources and emitting diagnostics live here.

use std::io::IsTerminal;
use std::path::Path;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, render_statements, render_tokens};
pub use explain::explain_error;
pub use repl::run_repl;
pub use run::run_file;

/// Exit code when the input file cannot be read.
pub const EXIT_NO_INPUT: u8 = 66;

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &Path) -> Result<String, u8> {
    std::fs::read_to_string(path).map_err(|e| {
        let shown = path.display();
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            std::io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {e}"),
        };
        eprintln!("error: {msg}");
        EXIT_NO_INPUT
    })
}

/// Render diagnostics for `source` on stderr, followed by a summary line.
pub(crate) fn emit_diagnostics(
    diagnostics: &[Diagnostic],
    source: &str,
    path: &Path,
    color: ColorMode,
) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(source)
        .with_file_path(path.display().to_string());
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}
