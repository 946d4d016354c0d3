use super::*;
use lox_diagnostic::ErrorCode;
use lox_ir::{stmt_to_string, ExprKind, Span, StmtKind};
use pretty_assertions::assert_eq;

fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let lexed = lox_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens, interner)
}

/// Parse and render every statement in prefix form.
fn render(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner);
    assert!(!output.has_errors(), "unexpected errors: {:?}", output.errors);
    output
        .statements
        .iter()
        .map(|stmt| stmt_to_string(stmt, &interner))
        .collect()
}

fn error_messages(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    parse_source(source, &interner)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_precedence() {
    assert_eq!(render("1 + 2 * 3;"), vec!["(; (+ 1 (* 2 3)))"]);
    assert_eq!(render("1 * 2 + 3;"), vec!["(; (+ (* 1 2) 3))"]);
    assert_eq!(render("1 < 2 == true;"), vec!["(; (== (< 1 2) true))"]);
    assert_eq!(render("-1 - -2;"), vec!["(; (- (- 1) (- 2)))"]);
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(render("1 - 2 - 3;"), vec!["(; (- (- 1 2) 3))"]);
    assert_eq!(render("8 / 4 / 2;"), vec!["(; (/ (/ 8 4) 2))"]);
    assert_eq!(render("a != b != c;"), vec!["(; (!= (!= a b) c))"]);
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(render("a = b = 3;"), vec!["(; (= a (= b 3)))"]);
}

#[test]
fn test_unary_and_grouping() {
    assert_eq!(render("!!true;"), vec!["(; (! (! true)))"]);
    assert_eq!(render("(1 + 2) * 3;"), vec!["(; (* (group (+ 1 2)) 3))"]);
    assert_eq!(render("-(x);"), vec!["(; (- (group x)))"]);
}

#[test]
fn test_literals() {
    assert_eq!(
        render("nil; true; false; 2.5; \"s\";"),
        vec!["(; nil)", "(; true)", "(; false)", "(; 2.5)", "(; \"s\")"]
    );
}

#[test]
fn test_declarations_and_print() {
    assert_eq!(
        render("var a = \"hi\";\nvar b;\nprint a = 2;"),
        vec!["(var a \"hi\")", "(var b)", "(print (= a 2))"]
    );
}

#[test]
fn test_statement_spans_cover_semicolon() {
    let interner = StringInterner::new();
    let output = parse_source("print 1;  var x = 2;", &interner);
    assert_eq!(output.statements[0].span, Span::new(0, 8));
    assert_eq!(output.statements[1].span, Span::new(10, 20));
}

#[test]
fn test_assign_keeps_name_token() {
    let interner = StringInterner::new();
    let output = parse_source("\n\nvalue = 1;", &interner);
    let StmtKind::Expression(expr) = &output.statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Assign { name, .. } = &expr.kind else {
        panic!("expected assignment");
    };
    assert_eq!(interner.lookup(name.lexeme), "value");
    assert_eq!(name.line, 3);
}

#[test]
fn test_invalid_assignment_target_does_not_unwind() {
    let interner = StringInterner::new();
    let output = parse_source("1 + 2 = 3;\nprint 4;", &interner);

    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.code, ErrorCode::E1004);
    assert_eq!(
        error.to_string(),
        "[line 1] Error at '=': Invalid assignment target."
    );

    // Both statements survive; the bad one keeps its left side as the value
    let rendered: Vec<_> = output
        .statements
        .iter()
        .map(|s| stmt_to_string(s, &interner))
        .collect();
    assert_eq!(rendered, vec!["(; (+ 1 2))", "(print 4)"]);
}

#[test]
fn test_grouped_target_is_invalid() {
    assert_eq!(
        error_messages("var a; (a) = 1;"),
        vec!["[line 1] Error at '=': Invalid assignment target."]
    );
}

#[test]
fn test_missing_semicolons() {
    assert_eq!(
        error_messages("print 1\n"),
        vec!["[line 2] Error at end: Expect ';' after value."]
    );
    assert_eq!(
        error_messages("var a = 1 var b;"),
        vec!["[line 1] Error at 'var': Expect ';' after variable declaration."]
    );
    assert_eq!(
        error_messages("a + 1"),
        vec!["[line 1] Error at end: Expect ';' after expression."]
    );
}

#[test]
fn test_missing_expression_and_name() {
    assert_eq!(
        error_messages("print;"),
        vec!["[line 1] Error at ';': Expect expression."]
    );
    assert_eq!(
        error_messages("var 1 = 2;"),
        vec!["[line 1] Error at '1': Expect variable name."]
    );
    assert_eq!(
        error_messages("(1 + 2;"),
        vec!["[line 1] Error at ';': Expect ')' after expression."]
    );
}

#[test]
fn test_recovery_reports_each_statement_once() {
    let interner = StringInterner::new();
    let output = parse_source("var = 1;\nprint (2;\nprint 3;", &interner);

    let messages: Vec<_> = output.errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 2] Error at ';': Expect ')' after expression.",
        ]
    );
    assert_eq!(output.statements.len(), 1);
    assert_eq!(stmt_to_string(&output.statements[0], &interner), "(print 3)");
}

#[test]
fn test_recovery_stops_before_statement_keyword() {
    let interner = StringInterner::new();
    let output = parse_source("1 + * 2 print 3;", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1002);
    assert_eq!(output.statements.len(), 1);
}

#[test]
fn test_empty_input() {
    let interner = StringInterner::new();
    let output = parse_source("", &interner);
    assert!(output.statements.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn test_deeply_nested_input_does_not_overflow() {
    let depth = 20_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let interner = StringInterner::new();
    let output = parse_source(&source, &interner);
    assert!(!output.has_errors());
    assert_eq!(output.statements.len(), 1);

    let negations = format!("{}1;", "-".repeat(depth));
    let output = parse_source(&negations, &interner);
    assert!(!output.has_errors());
}

#[test]
fn test_parse_error_diagnostic() {
    let interner = StringInterner::new();
    let output = parse_source("1 = 2;", &interner);
    let diag = output.errors[0].to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.message, "Invalid assignment target.");
    assert_eq!(diag.line, Some(1));
    assert_eq!(diag.primary_span(), Some(Span::new(2, 3)));
    assert!(!diag.notes.is_empty());
}
