use core::ops::Range;

/// A byte range into the source string a formula was compiled from.
///
/// Characters synthesized during preprocessing (the implicit `0` of a unary
/// minus, the end marker) get an empty span located at the character that
/// caused them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    /// An empty span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Span(offset..offset)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest span covering both `self` and `other`.
    pub fn join(&self, other: &Span) -> Span {
        Span(self.start().min(other.start())..self.end().max(other.end()))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span(range)
    }
}
