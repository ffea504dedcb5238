//! Positions that may be measured from the end of a sequence.
//!
//! `Index::End(0)` is one past the last element (`^0`), `Index::End(1)` is the
//! last element (`^1`). A `QueryRange` is a half-open pair of such indices.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    Start(usize),
    End(usize),
}

impl Index {
    pub const fn from_start(value: usize) -> Self {
        Index::Start(value)
    }

    pub const fn from_end(value: usize) -> Self {
        Index::End(value)
    }

    pub const fn is_from_end(&self) -> bool {
        matches!(self, Index::End(_))
    }

    pub const fn value(&self) -> usize {
        match self {
            Index::Start(v) | Index::End(v) => *v,
        }
    }

    /// Absolute position against `len`, or `None` when it lands outside `0..=len`.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        match *self {
            Index::Start(v) if v <= len => Some(v),
            Index::Start(_) => None,
            Index::End(v) => len.checked_sub(v),
        }
    }

    /// Absolute position against `len`, clamped into `0..=len`.
    pub fn resolve_clamped(&self, len: usize) -> usize {
        match *self {
            Index::Start(v) => v.min(len),
            Index::End(v) => len.saturating_sub(v),
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::Start(0)
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Index::Start(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Start(v) => write!(f, "{v}"),
            Index::End(v) => write!(f, "^{v}"),
        }
    }
}

/// Half-open `start..end` where either bound may count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryRange {
    pub start: Index,
    pub end: Index,
}

impl QueryRange {
    pub const fn new(start: Index, end: Index) -> Self {
        Self { start, end }
    }

    pub const fn all() -> Self {
        Self::new(Index::Start(0), Index::End(0))
    }

    /// Resolve against a known length into `(skip, take)`. Out-of-range bounds
    /// clamp; an inverted window is empty.
    pub fn window(&self, len: usize) -> (usize, usize) {
        let start = self.start.resolve_clamped(len);
        let end = self.end.resolve_clamped(len);
        (start, end.saturating_sub(start))
    }
}

impl fmt::Display for QueryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for QueryRange {
    fn from(r: Range<usize>) -> Self {
        QueryRange::new(Index::Start(r.start), Index::Start(r.end))
    }
}

impl From<RangeFrom<usize>> for QueryRange {
    fn from(r: RangeFrom<usize>) -> Self {
        QueryRange::new(Index::Start(r.start), Index::End(0))
    }
}

impl From<RangeTo<usize>> for QueryRange {
    fn from(r: RangeTo<usize>) -> Self {
        QueryRange::new(Index::Start(0), Index::Start(r.end))
    }
}

impl From<RangeFull> for QueryRange {
    fn from(_: RangeFull) -> Self {
        QueryRange::all()
    }
}

impl From<Range<Index>> for QueryRange {
    fn from(r: Range<Index>) -> Self {
        QueryRange::new(r.start, r.end)
    }
}

impl From<RangeFrom<Index>> for QueryRange {
    fn from(r: RangeFrom<Index>) -> Self {
        QueryRange::new(r.start, Index::End(0))
    }
}

impl From<RangeTo<Index>> for QueryRange {
    fn from(r: RangeTo<Index>) -> Self {
        QueryRange::new(Index::Start(0), r.end)
    }
}

/// Resolve a copy request against `remaining` elements: the absolute start
/// offset and how many elements to copy. `None` when the offset is out of range.
pub fn copy_window(remaining: usize, offset: Index, count: usize) -> Option<(usize, usize)> {
    let start = offset.resolve(remaining)?;
    if start == remaining && count > 0 {
        return None;
    }
    Some((start, count.min(remaining - start)))
}
