//! Leaf sources: the adapters that bring data into the protocol.

pub mod iter;
pub mod range;
pub mod slice;

use zeroq_core::numeric::Numeric;
use zeroq_core::Result;

pub use iter::{EmptySource, ExactIterSource, IterSource, RepeatSource};
pub use range::{RangeSource, SequenceSource};
pub use slice::{SliceSource, VecSource};

pub fn from_slice<T: Clone>(slice: &[T]) -> SliceSource<'_, T> {
    SliceSource::new(slice)
}

pub fn from_vec<T>(items: Vec<T>) -> VecSource<T> {
    VecSource::new(items)
}

/// One-shot source with no known count.
pub fn from_iter<I: IntoIterator>(iter: I) -> IterSource<I::IntoIter> {
    IterSource::new(iter.into_iter())
}

pub fn from_exact_iter<I>(iter: I) -> ExactIterSource<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    ExactIterSource::new(iter.into_iter())
}

pub fn range<N: Numeric>(start: N, count: usize) -> Result<RangeSource<N>> {
    RangeSource::new(start, count)
}

pub fn sequence<N: Numeric>(start: N, end: N, step: N) -> Result<SequenceSource<N>> {
    SequenceSource::new(start, end, step)
}

pub fn repeat<T: Clone>(value: T, count: usize) -> RepeatSource<T> {
    RepeatSource::new(value, count)
}

pub fn empty<T>() -> EmptySource<T> {
    EmptySource::default()
}
