//! Inspection commands: `lex` and `parse`.

use std::fmt::Write as _;
use std::path::Path;

use lox_diagnostic::emitter::ColorMode;
use lox_diagnostic::Diagnostic;
use lox_ir::{stmt_to_string, Stmt, StringInterner, TokenList};

use super::{emit_diagnostics, read_file};

/// One token per line: `line KIND 'lexeme'`.
pub fn render_tokens(tokens: &TokenList, interner: &StringInterner) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{} {} '{}'",
            token.line,
            token.kind,
            interner.lookup(token.lexeme)
        );
    }
    out
}

/// One statement per line in prefix form.
pub fn render_statements(statements: &[Stmt], interner: &StringInterner) -> String {
    let mut out = String::new();
    for stmt in statements {
        out.push_str(&stmt_to_string(stmt, interner));
        out.push('\n');
    }
    out
}

/// Print the token stream of the file at `path`.
pub fn lex_file(path: &Path, color: ColorMode) -> u8 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(&source, &interner);
    print!("{}", render_tokens(&lexed.tokens, &interner));

    let diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .collect();
    finish(&diagnostics, &source, path, color)
}

/// Print the statements parsed from the file at `path`.
pub fn parse_file(path: &Path, color: ColorMode) -> u8 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(&source, &interner);
    let parsed = lox_parse::parse(&lexed.tokens, &interner);
    print!("{}", render_statements(&parsed.statements, &interner));

    let mut diagnostics: Vec<Diagnostic> = lexed
        .errors
        .iter()
        .map(lox_lexer::LexError::to_diagnostic)
        .collect();
    diagnostics.extend(parsed.errors.iter().map(lox_parse::ParseError::to_diagnostic));
    diagnostics.sort_by_key(|d| d.line.unwrap_or(u32::MAX));
    finish(&diagnostics, &source, path, color)
}

fn finish(diagnostics: &[Diagnostic], source: &str, path: &Path, color: ColorMode) -> u8 {
    emit_diagnostics(diagnostics, source, path, color);
    if diagnostics.is_empty() {
        0
    } else {
        65
    }
}
