use std::ops::Range;

/// A byte range `[start, end)` into the source text a [`Document`] was parsed from.
///
/// Nodes store spans rather than copied text so that slicing the source with
/// any span reproduces the exact bytes the parser saw.
///
/// [`Document`]: crate::parsing::Document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the slice of `source` covered by this span, or `""` when the
    /// span does not land on char boundaries of `source`.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
