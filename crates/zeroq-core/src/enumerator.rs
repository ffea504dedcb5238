//! The enumerator protocol every source and operator implements.
//!
//! Operators own their upstream by value, so a whole query is one nested
//! stack value (`Take<Skip<Filter<SliceSource<T>, P>>>`) and every call is
//! statically dispatched.

use crate::index::Index;

/// Pull-based, single-pass enumerator with optional bulk fast paths.
///
/// Invariants:
/// - Once `try_get_next` returns `None` it keeps returning `None`.
/// - The `try_*` fast paths never enumerate and never lie: a stage that cannot
///   answer exactly returns `None`/`false` so the caller falls back to pulling.
/// - `dispose` is idempotent. Dropping an enumerator disposes it.
pub trait ValueEnumerator {
    type Item;

    /// Advance by exactly one element.
    fn try_get_next(&mut self) -> Option<Self::Item>;

    /// Remaining element count, only when known without enumerating.
    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        None
    }

    /// Contiguous view of all remaining elements, when one exists without
    /// allocating.
    fn try_get_span(&self) -> Option<&[Self::Item]> {
        None
    }

    /// Append up to `count` remaining elements, starting at `offset`, onto
    /// `destination` without advancing the cursor.
    ///
    /// On success exactly `min(count, remaining - offset)` elements are appended.
    /// Returns `false`, with `destination` untouched, when `offset` is out of
    /// range or this stage cannot service the request.
    fn try_copy_to(
        &mut self,
        _destination: &mut Vec<Self::Item>,
        _offset: Index,
        _count: usize,
    ) -> bool
    where
        Self::Item: Clone,
    {
        false
    }

    /// Release rented buffers and the upstream. Safe to call repeatedly.
    fn dispose(&mut self) {}
}

/// Adapter from a `ValueEnumerator` to `std::iter::Iterator`.
pub struct ValueIter<E> {
    inner: E,
}

impl<E: ValueEnumerator> ValueIter<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: ValueEnumerator> Iterator for ValueIter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.try_get_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner.try_get_non_enumerated_count() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}
