//! Diagnostic queue for collecting and ordering diagnostics.
//!
//! The lexer and parser report independently; the driver merges both into
//! one queue so output is in source order regardless of which phase found
//! the problem first.

use crate::Diagnostic;

/// Collects diagnostics for one run.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.extend(lex_errors.iter().map(LexError::to_diagnostic));
/// queue.extend(parse.errors.iter().map(ParseError::to_diagnostic));
/// let sorted = queue.take();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of error-severity diagnostics collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, sorted by line.
    ///
    /// The sort is stable: diagnostics on the same line keep the order they
    /// were pushed in, and diagnostics without a line sort last.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        self.error_count = 0;
        diagnostics.sort_by_key(|d| d.line.unwrap_or(u32::MAX));
        diagnostics
    }
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}
