//! Lexer for Lox using logos with string interning.
//!
//! The lexer:
//! - Interns every lexeme, identifier, and string literal
//! - Tracks 1-based line numbers, including across multi-line strings
//! - Keeps going after errors so one pass reports all of them
//! - Always terminates the token list with a single `Eof`

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Result of scanning one source text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut line: u32 = 1;
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = Span::from_range(raw.span());
        let slice = raw.slice();

        match result {
            Ok(RawToken::Newline) => line = line.saturating_add(1),
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::UnterminatedString) => {
                line = line.saturating_add(count_newlines(slice));
                output.errors.push(LexError::new(
                    LexErrorKind::UnterminatedString,
                    line,
                    span,
                ));
            }
            Ok(token) => {
                // Only string literals contain newlines
                line = line.saturating_add(count_newlines(slice));
                if let Some(kind) = convert_token(token, slice, interner) {
                    output
                        .tokens
                        .push(Token::new(kind, interner.intern(slice), line, span));
                }
            }
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{FFFD}');
                output.errors.push(LexError::new(
                    LexErrorKind::UnexpectedCharacter { found },
                    line,
                    span,
                ));
            }
        }
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    output.tokens.push_eof(line, end);
    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        lines = line,
        "lexed source"
    );
    output
}

fn count_newlines(slice: &str) -> u32 {
    u32::try_from(slice.bytes().filter(|&b| b == b'\n').count()).unwrap_or(u32::MAX)
}

/// Convert a raw token to a `TokenKind`, interning literal payloads.
///
/// Returns `None` for trivia and error shapes, which the caller handles.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,

        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,

        RawToken::Number(n) => TokenKind::number(n),
        RawToken::String => {
            // Strip the quotes
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(content))
        }
        RawToken::Identifier => {
            TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Identifier(interner.intern(slice)))
        }

        RawToken::LineComment | RawToken::Newline | RawToken::UnterminatedString => return None,
    };
    Some(kind)
}
