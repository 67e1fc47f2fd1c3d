//! Source location spans

use serde::{Deserialize, Serialize};

/// Source location information for a syntax node.
///
/// Byte offsets are half-open (`start..end`); line and column are
/// 1-indexed and refer to the start of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of the start offset
    pub line: u32,
    /// Column of the start offset
    pub column: u32,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// An empty span anchored at the end of `anchor`.
    ///
    /// Synthesized nodes inserted into an existing unit carry one of
    /// these; they occupy no source text until the host rewrites the file.
    pub fn at_end_of(anchor: &Span) -> Self {
        Self {
            start: anchor.end,
            end: anchor.end,
            line: anchor.line,
            column: anchor.column,
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no source text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the spanned text out of `source`
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let source = "class ImageModel";
        let span = Span::new(6, 16, 1, 7);
        assert_eq!(span.slice(source), "ImageModel");
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_at_end_of_is_empty() {
        let anchor = Span::new(10, 25, 2, 5);
        let synthesized = Span::at_end_of(&anchor);
        assert!(synthesized.is_empty());
        assert_eq!(synthesized.start, 25);
    }
}
