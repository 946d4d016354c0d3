use super::*;
use crate::ErrorCode;
use lox_ir::Span;
use pretty_assertions::assert_eq;

fn render(emitter: TerminalEmitter<Vec<u8>>, diagnostic: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diagnostic);
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

#[test]
fn test_header_and_line_without_source() {
    let diag = Diagnostic::error(ErrorCode::E6004)
        .with_message("Operands must be two numbers or two strings.")
        .with_line(1);
    assert_eq!(
        render(plain(), &diag),
        "error[E6004]: Operands must be two numbers or two strings.\n --> line 1\n\n"
    );
}

#[test]
fn test_snippet_with_caret() {
    let source = "var a = 1;\n1 + 2 = 3;\n";
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("Invalid assignment target.")
        .with_line(2)
        .with_label(Span::new(17, 18), "cannot assign here");
    let out = render(plain().with_source(source).with_file_path("t.lox"), &diag);
    assert_eq!(
        out,
        "error[E1004]: Invalid assignment target.\n \
         --> t.lox:2:7\n  \
         |\n\
         2 | 1 + 2 = 3;\n  \
         |       ^ cannot assign here\n\n"
    );
}

#[test]
fn test_line_derived_from_span() {
    let source = "print a;";
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("Undefined variable 'a'.")
        .with_label(Span::new(6, 7), "");
    let out = render(plain().with_source(source), &diag);
    assert!(out.contains(" --> line 1\n"), "{out}");
    assert!(out.contains("1 | print a;\n"), "{out}");
    assert!(out.contains("  |       ^\n"), "{out}");
}

#[test]
fn test_notes_are_rendered() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("Expect ';' after value.")
        .with_note("statements end with `;`");
    let out = render(plain(), &diag);
    assert!(out.contains(" = note: statements end with `;`"), "{out}");
}

#[test]
fn test_colors_only_when_enabled() {
    let diag = Diagnostic::error(ErrorCode::E0002).with_message("Unexpected character.");
    let colored = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false),
        &diag,
    );
    assert!(colored.contains("\x1b["));
    let auto_off = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, false),
        &diag,
    );
    assert!(!auto_off.contains("\x1b["));
}

#[test]
fn test_summary() {
    let mut emitter = plain();
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(2, 1);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "error: aborting due to previous error\n\
         error: aborting due to 2 previous errors; 1 warning emitted\n"
    );
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}
