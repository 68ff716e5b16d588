use proc_macro2::{LineColumn, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line and column in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        SourceLocation { line, column }
    }
}

/// proc-macro2 columns are 0-based, lines 1-based.
impl From<LineColumn> for SourceLocation {
    fn from(position: LineColumn) -> Self {
        SourceLocation {
            line: position.line,
            column: position.column + 1,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps span positions back onto the text they were parsed from.
///
/// Only valid for spans produced by parsing `text` itself in this thread
/// (proc-macro2's fallback source map is thread-local).
pub struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(index, _)| index + 1))
            .collect();
        SourceText { text, line_starts }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of a line/column position. Columns count characters.
    pub fn offset(&self, position: LineColumn) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line.saturating_sub(1)) else {
            return self.text.len();
        };
        self.text[line_start..]
            .char_indices()
            .nth(position.column)
            .map_or(self.text.len(), |(index, _)| line_start + index)
    }

    pub fn slice_between(&self, start: LineColumn, end: LineColumn) -> &'a str {
        let start = self.offset(start);
        let end = self.offset(end).max(start);
        &self.text[start..end]
    }

    pub fn slice(&self, span: Span) -> &'a str {
        self.slice_between(span.start(), span.end())
    }

    /// Leading whitespace of a 1-based line.
    pub fn indent(&self, line: usize) -> &'a str {
        let Some(&line_start) = self.line_starts.get(line.saturating_sub(1)) else {
            return "";
        };
        let rest = &self.text[line_start..];
        let width = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        &rest[..width]
    }
}
