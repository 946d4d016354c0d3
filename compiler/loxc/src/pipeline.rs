//! Scan, parse, and interpret one source string.

use lox_diagnostic::queue::DiagnosticQueue;
use lox_diagnostic::Diagnostic;
use lox_eval::Interpreter;
use lox_ir::StringInterner;
use tracing::debug;

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Scanning or parsing reported errors; nothing was executed.
    StaticError,
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl RunStatus {
    /// Process exit code, following the sysexits convention.
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::StaticError => 65,
            RunStatus::RuntimeError => 70,
        }
    }
}

/// Diagnostics from a run, in source order, and how it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub status: RunStatus,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

/// Run `source` against `interpreter`.
///
/// Scanner and parser errors are collected together; if there are any,
/// no statement runs. Otherwise statements execute until the first
/// runtime error. Globals defined before that point stay defined.
pub fn run(source: &str, interner: &StringInterner, interpreter: &mut Interpreter<'_>) -> RunOutcome {
    let lexed = lox_lexer::lex(source, interner);
    let parsed = lox_parse::parse(&lexed.tokens, interner);

    let mut queue = DiagnosticQueue::new();
    queue.extend(lexed.errors.iter().map(lox_lexer::LexError::to_diagnostic));
    queue.extend(parsed.errors.iter().map(lox_parse::ParseError::to_diagnostic));

    if queue.has_errors() {
        debug!(errors = queue.error_count(), "static errors, skipping execution");
        return RunOutcome {
            diagnostics: queue.take(),
            status: RunStatus::StaticError,
        };
    }

    match interpreter.interpret(&parsed.statements) {
        Ok(()) => RunOutcome {
            diagnostics: Vec::new(),
            status: RunStatus::Success,
        },
        Err(error) => RunOutcome {
            diagnostics: vec![error.to_diagnostic()],
            status: RunStatus::RuntimeError,
        },
    }
}
