//! The interactive prompt.

use std::io::IsTerminal;

use lox_diagnostic::emitter::ColorMode;
use lox_eval::Interpreter;
use lox_ir::StringInterner;

use crate::Session;

/// Run the prompt on stdin until end of input.
pub fn run_repl(color: ColorMode) -> u8 {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let session = Session::new(color).with_tty(std::io::stderr().is_terminal());

    let stdin = std::io::stdin();
    let result = session.run(
        stdin.lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        &interner,
        &mut interpreter,
    );
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
