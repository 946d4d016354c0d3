//! Token cursor for navigating the token stream.
//!
//! Provides token access, consumption, and error construction.

use lox_diagnostic::ErrorCode;
use lox_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::recovery::TokenSet;
use crate::ParseError;

/// Cursor for navigating tokens.
///
/// The position only moves forward and never past the final `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
    /// Returned once the list is exhausted, so a list missing its
    /// terminator still reads as ending in `Eof`.
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        let eof = match tokens.as_slice().last() {
            Some(last) if last.is_eof() => *last,
            Some(last) => Token::new(TokenKind::Eof, Name::EMPTY, last.line, Span::point(last.span.end)),
            None => Token::new(TokenKind::Eof, Name::EMPTY, 1, Span::DUMMY),
        };
        Cursor {
            tokens,
            interner,
            pos: 0,
            eof,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// The most recently consumed token, or the current one at the start.
    #[inline]
    pub fn previous(&self) -> &Token {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).unwrap_or(&self.eof),
            None => self.current(),
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Whether the current token has the same kind as `kind`, ignoring
    /// literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().tag() == kind.tag()
    }

    /// Whether the current token is in `set`.
    #[inline]
    pub fn check_any(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the cursor stays put and returns `Eof` again.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> Option<Token> {
        self.check(kind).then(|| self.advance())
    }

    /// Consume a token of `kind`, or fail at the current token.
    ///
    /// Split into inline happy path + `#[cold]` error path.
    #[inline]
    pub fn expect(
        &mut self,
        kind: &TokenKind,
        code: ErrorCode,
        message: &'static str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(code, message))
        }
    }

    /// Build an error pointing at the current token.
    #[cold]
    #[inline(never)]
    pub fn error_at_current(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::at_token(code, message, self.current(), self.interner)
    }

    /// Build an error pointing at `token`.
    #[cold]
    #[inline(never)]
    pub fn error_at(&self, token: &Token, code: ErrorCode, message: &str) -> ParseError {
        ParseError::at_token(code, message, token, self.interner)
    }
}
