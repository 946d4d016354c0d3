//! Raw tokens recognized by logos, before interning and line tracking.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // === Punctuation ===
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    // === Operators ===
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // === Literals ===
    /// Digits with an optional fraction; no leading or trailing dot.
    #[regex(r"[0-9]+", number)]
    Number(f64),

    /// Strings may span lines and have no escapes.
    #[regex(r#""[^"]*""#)]
    String,

    /// An opening quote that runs to end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    /// Identifiers and keywords; keywords are split out during conversion.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

/// Extend an integer part over `.digits` when present.
///
/// A dot not followed by a digit is left for the next token, so `7.`
/// scans as `7` then `.`.
fn number(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let fraction = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + fraction);
    }
    lex.slice().parse().ok()
}
