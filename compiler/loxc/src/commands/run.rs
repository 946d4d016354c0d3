//! The `run` command: execute a script.

use std::path::Path;

use lox_diagnostic::emitter::ColorMode;
use lox_eval::Interpreter;
use lox_ir::StringInterner;
use tracing::info;

use super::{emit_diagnostics, read_file};
use crate::run;

/// Run the script at `path`, printing to stdout.
///
/// Returns 0 on success, 65 after scanner or parser errors, 70 after a
/// runtime error.
pub fn run_file(path: &Path, color: ColorMode) -> u8 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    info!(path = %path.display(), bytes = source.len(), "running script");

    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let outcome = run(&source, &interner, &mut interpreter);
    emit_diagnostics(&outcome.diagnostics, &source, path, color);
    outcome.status.exit_code()
}
