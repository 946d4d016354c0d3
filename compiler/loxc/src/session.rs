//! Interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_eval::Interpreter;
use lox_ir::StringInterner;

use crate::run;

/// REPL settings. State lives in the interpreter passed to [`Session::run`],
/// so one interpreter can outlive several sessions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Session {
    color: ColorMode,
    errors_are_tty: bool,
}

impl Session {
    pub const PROMPT: &'static str = "> ";

    pub fn new(color: ColorMode) -> Self {
        Session {
            color,
            errors_are_tty: false,
        }
    }

    /// Whether the diagnostic stream is a terminal; only consulted under
    /// `ColorMode::Auto`.
    #[must_use]
    pub fn with_tty(mut self, errors_are_tty: bool) -> Self {
        self.errors_are_tty = errors_are_tty;
        self
    }

    /// Read lines from `input` until end of input, running each one.
    ///
    /// Prompts go to `out`, diagnostics to `errors`; `print` output goes
    /// wherever the interpreter's print handler sends it. A failing line
    /// is reported and the loop carries on with the same globals.
    pub fn run<R, O, E>(
        &self,
        mut input: R,
        out: &mut O,
        errors: &mut E,
        interner: &StringInterner,
        interpreter: &mut Interpreter<'_>,
    ) -> io::Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut line = String::new();
        loop {
            write!(out, "{}", Self::PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let outcome = run(&line, interner, interpreter);
            if !outcome.diagnostics.is_empty() {
                let mut emitter =
                    TerminalEmitter::with_color_mode(&mut *errors, self.color, self.errors_are_tty)
                        .with_source(line.as_str());
                emitter.emit_all(&outcome.diagnostics);
                emitter.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_eval::buffer_handler;
    use pretty_assertions::assert_eq;

    struct Transcript {
        prompts: String,
        errors: String,
        printed: String,
    }

    fn session(input: &str) -> Transcript {
        let interner = StringInterner::new();
        let printed = buffer_handler();
        let mut interpreter = Interpreter::new(&interner).with_print_handler(printed.clone());
        let mut out = Vec::new();
        let mut errors = Vec::new();
        Session::new(ColorMode::Never)
            .run(input.as_bytes(), &mut out, &mut errors, &interner, &mut interpreter)
            .unwrap();
        Transcript {
            prompts: String::from_utf8(out).unwrap(),
            errors: String::from_utf8(errors).unwrap(),
            printed: printed.get_output(),
        }
    }

    #[test]
    fn test_globals_persist_between_lines() {
        let transcript = session("var a = 1;\na = a + 1;\nprint a;\n");
        assert_eq!(transcript.printed, "2\n");
        assert_eq!(transcript.prompts, "> > > > \n");
        assert_eq!(transcript.errors, "");
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let transcript = session("print nope;\nprint (;\nprint \"still here\";\n");
        assert_eq!(transcript.printed, "still here\n");
        assert!(transcript.errors.contains("error[E6001]: Undefined variable 'nope'."));
        assert!(transcript.errors.contains("error[E1002]: Expect expression."));
    }

    #[test]
    fn test_empty_input_ends_immediately() {
        let transcript = session("");
        assert_eq!(transcript.prompts, "> \n");
        assert_eq!(transcript.printed, "");
    }
}
