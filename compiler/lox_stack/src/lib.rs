//! Stack safety for the recursive parser and tree-walking interpreter.
//!
//! Both the parser and the evaluator descend once per nesting level of an
//! expression, so input like `((((((1))))))` or `!!!!!!!true` nested a few
//! hundred thousand levels deep would exhaust a fixed native stack. Every
//! such descent is wrapped in [`ensure_sufficient_stack`], which grows the
//! stack on demand instead of overflowing.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| {
///         // ... may recurse into parse_unary again ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
