//! Line lookups over source text.
//!
//! The terminal emitter uses these to print the offending source line and
//! place carets under a label's span.

/// Pre-computed line start offsets for O(log L) lookups.
///
/// # Example
///
/// ```
/// use lox_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "var a;\nprint a;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_from_offset(0), 1);
/// assert_eq!(table.line_from_offset(7), 2);
/// assert_eq!(table.line_text(source, 2), Some("print a;"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Number of lines; an empty source has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx + 1).unwrap_or(u32::MAX)
    }

    /// Byte offset where `line` (1-based) starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        self.offsets.get(idx).copied()
    }

    /// Text of `line` (1-based) without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// 1-based (line, column) for `offset`, counting columns in chars.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(column + 1).unwrap_or(u32::MAX))
    }
}
