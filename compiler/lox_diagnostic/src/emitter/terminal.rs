//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1004]: Invalid assignment target.
//!  --> script.lox:1:7
//!   |
//! 1 | 1 + 2 = 3;
//!   |       ^ cannot assign here
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Returned for an unrecognized `--color` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorModeError {
    pub input: String,
}

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color mode `{}` (expected auto, always, or never)",
            self.input
        )
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Source text plus its line table, for snippet rendering.
struct SourceView {
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter over `writer`.
    ///
    /// `is_tty` decides coloring when `mode` is `Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so diagnostics show the offending line.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceView { text, lines });
        self
    }

    /// Attach the path shown in the `-->` location line.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Line the diagnostic points at: its own, or the primary span's.
    fn resolve_line(&self, diagnostic: &Diagnostic) -> Option<u32> {
        diagnostic.line.or_else(|| {
            let source = self.source.as_ref()?;
            let span = diagnostic.primary_span()?;
            Some(source.lines.line_from_offset(span.start))
        })
    }

    /// Column of the primary label, if it lies on `line`.
    fn resolve_column(&self, diagnostic: &Diagnostic, line: u32) -> Option<u32> {
        let source = self.source.as_ref()?;
        let span = diagnostic.primary_span()?;
        let (span_line, column) = source.lines.offset_to_line_col(&source.text, span.start);
        (span_line == line).then_some(column)
    }

    fn write_location(&mut self, gutter: usize, line: u32, column: Option<u32>) {
        let mut location = match &self.file_path {
            Some(path) => format!("{path}:{line}"),
            None => format!("line {line}"),
        };
        if let (Some(column), Some(_)) = (column, &self.file_path) {
            location.push_str(&format!(":{column}"));
        }
        let _ = write!(self.writer, "{:gutter$}", "");
        self.write_colored("-->", colors::SECONDARY);
        let _ = writeln!(self.writer, " {location}");
    }

    fn write_gutter(&mut self, gutter: usize, line_number: Option<u32>) {
        let number = line_number.map(|n| n.to_string()).unwrap_or_default();
        let text = format!("{number:>gutter$} |");
        self.write_colored(&text, colors::SECONDARY);
    }

    /// Write the source line and a marker row for each label on it.
    fn write_snippet(&mut self, gutter: usize, line: u32, labels: &[Label]) {
        let Some(source) = &self.source else {
            return;
        };
        let Some(text) = source.lines.line_text(&source.text, line) else {
            return;
        };
        let text = text.to_string();
        let line_start = source.lines.line_start(line).unwrap_or(0) as usize;
        let line_end = line_start + text.len();

        let mut markers = Vec::new();
        for label in labels {
            let start = label.span.start as usize;
            if start < line_start || start > line_end {
                continue;
            }
            let end = (label.span.end as usize).clamp(start, line_end);
            let indent = text
                .get(..start - line_start)
                .map_or(0, |prefix| prefix.chars().count());
            let width = text
                .get(start - line_start..end - line_start)
                .map_or(1, |marked| marked.chars().count().max(1));
            markers.push((indent, width, label.is_primary, label.message.clone()));
        }

        self.write_gutter(gutter, None);
        let _ = writeln!(self.writer);
        self.write_gutter(gutter, Some(line));
        let _ = writeln!(self.writer, " {text}");
        for (indent, width, is_primary, message) in markers {
            self.write_gutter(gutter, None);
            let _ = write!(self.writer, " {:indent$}", "");
            let (mark, color) = if is_primary {
                ('^', colors::ERROR)
            } else {
                ('-', colors::SECONDARY)
            };
            let underline: String = std::iter::repeat(mark).take(width).collect();
            self.write_colored(&underline, color);
            if message.is_empty() {
                let _ = writeln!(self.writer);
            } else {
                let _ = writeln!(self.writer, " {message}");
            }
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let line = self.resolve_line(diagnostic);
        let gutter = line.map_or(1, |n| n.to_string().len());
        if let Some(line) = line {
            let column = self.resolve_column(diagnostic, line);
            self.write_location(gutter, line, column);
            self.write_snippet(gutter, line, &diagnostic.labels);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{:gutter$} = ", "");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
