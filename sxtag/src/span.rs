#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Source location of a node: a byte range plus the 1-based line and column of
/// its first byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Span of synthesized nodes with no source counterpart.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    pub fn new(start: u32, end: u32, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_dummy(&self) -> bool {
        *self == Span::DUMMY
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// The line and column are taken from whichever span starts first. Dummy
    /// spans are ignored.
    pub fn cover(self, other: Span) -> Span {
        if self.is_dummy() {
            return other;
        }
        if other.is_dummy() {
            return self;
        }
        let first = if other.start < self.start { other } else { self };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
