//! Error recovery for the parser.
//!
//! Provides token sets and panic-mode synchronization so one mistake
//! produces one diagnostic and parsing continues at the next statement.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds using a bitset for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind::tag()`; payloads are
/// ignored, so `Identifier(_)` is one member.
///
/// # Example
/// ```ignore
/// const TERM: TokenSet = TokenSet::new()
///     .with(TokenKind::Minus)
///     .with(TokenKind::Plus);
///
/// if TERM.contains(&TokenKind::Plus) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

// Every tag must fit in the bitset.
const _: () = assert!(TokenKind::TAG_COUNT <= 64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.tag()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.tag())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Keywords that begin a statement; recovery stops before them.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens until the cursor sits at a statement boundary.
///
/// Always consumes at least one token (unless at `Eof`), then stops just
/// after a consumed `;` or just before a token in `boundary`.
pub fn synchronize(cursor: &mut Cursor<'_>, boundary: TokenSet) {
    cursor.advance();
    while !cursor.is_at_end() {
        if matches!(cursor.previous().kind, TokenKind::Semicolon) {
            return;
        }
        if boundary.contains(cursor.current_kind()) {
            return;
        }
        cursor.advance();
    }
}
