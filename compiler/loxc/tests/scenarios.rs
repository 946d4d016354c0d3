//! End-to-end runs through the driver pipeline.

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::ErrorCode;
use lox_eval::{buffer_handler, Interpreter, Value};
use lox_ir::StringInterner;
use loxc::{run, RunOutcome, RunStatus};
use pretty_assertions::assert_eq;

struct Run {
    outcome: RunOutcome,
    stdout: String,
}

fn run_source(source: &str) -> Run {
    let interner = StringInterner::new();
    let output = buffer_handler();
    let mut interpreter = Interpreter::new(&interner).with_print_handler(output.clone());
    let outcome = run(source, &interner, &mut interpreter);
    Run {
        outcome,
        stdout: output.get_output(),
    }
}

fn render(outcome: &RunOutcome, source: &str) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(source)
        .with_file_path("test.lox");
    emitter.emit_all(&outcome.diagnostics);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn redeclaring_a_global_overwrites_it() {
    let result = run_source(r#"var a = "before"; print a; var a = "after"; print a;"#);
    assert_eq!(result.outcome.status, RunStatus::Success);
    assert_eq!(result.stdout, "before\nafter\n");
}

#[test]
fn assignment_yields_the_assigned_value() {
    let interner = StringInterner::new();
    let output = buffer_handler();
    let mut interpreter = Interpreter::new(&interner).with_print_handler(output.clone());
    let outcome = run("var a = 1; print a = 2;", &interner, &mut interpreter);
    assert!(outcome.is_success());
    assert_eq!(output.get_output(), "2\n");
    assert_eq!(interpreter.lookup("a"), Some(Value::Number(2.0)));
}

#[test]
fn adding_number_and_string_is_a_runtime_error() {
    let source = "print 1 + \"1\";";
    let result = run_source(source);
    assert_eq!(result.stdout, "");
    assert_eq!(result.outcome.status, RunStatus::RuntimeError);
    assert_eq!(result.outcome.status.exit_code(), 70);
    assert_eq!(result.outcome.diagnostics.len(), 1);

    let diag = &result.outcome.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E6004);
    assert_eq!(diag.line, Some(1));
    assert_eq!(diag.message, "Operands must be two numbers or two strings.");
    assert!(render(&result.outcome, source)
        .starts_with("error[E6004]: Operands must be two numbers or two strings.\n --> test.lox:1:9\n"));
}

#[test]
fn invalid_assignment_target_is_reported_once() {
    let source = "1 + 2 = 3;\nprint \"after\";";
    let result = run_source(source);
    assert_eq!(result.outcome.status, RunStatus::StaticError);
    assert_eq!(result.outcome.status.exit_code(), 65);
    assert_eq!(result.stdout, "");

    let codes: Vec<_> = result.outcome.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1004]);
    assert_eq!(result.outcome.diagnostics[0].message, "Invalid assignment target.");
    assert_eq!(result.outcome.diagnostics[0].line, Some(1));

    let rendered = render(&result.outcome, source);
    assert_eq!(
        rendered,
        "error[E1004]: Invalid assignment target.\n \
         --> test.lox:1:7\n  \
         |\n\
         1 | 1 + 2 = 3;\n  \
         |       ^ found '='\n  \
         = note: only a variable name can appear left of `=`\n\n"
    );
}

#[test]
fn independent_parse_errors_are_all_reported() {
    let result = run_source("var = 1;\nprint (1;\nprint 2;\nvar b = ;");
    let lines: Vec<_> = result
        .outcome
        .diagnostics
        .iter()
        .map(|d| (d.code, d.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            (ErrorCode::E1003, Some(1)),
            (ErrorCode::E1001, Some(2)),
            (ErrorCode::E1002, Some(4)),
        ]
    );
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let result = run_source("print \"one\";\nprint undefined;\nprint \"three\";");
    assert_eq!(result.stdout, "one\n");
    assert_eq!(result.outcome.diagnostics[0].code, ErrorCode::E6001);
    assert_eq!(result.outcome.diagnostics[0].line, Some(2));
}

#[test]
fn program_with_comments_and_blank_lines() {
    let source = "// setup\nvar greeting = \"hello\";\n\n// greet\nprint greeting + \", world\";\nprint 10 / 4;\n";
    let result = run_source(source);
    assert!(result.outcome.is_success());
    assert_eq!(result.stdout, "hello, world\n2.5\n");
}
