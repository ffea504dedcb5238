use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

use crate::clamp_count;
use crate::positional::SkipTake;

/// Discards the first `skip_count` elements.
pub struct Skip<E> {
    source: E,
    skip_count: usize,
    skipped: usize,
}

impl<E: ValueEnumerator> Skip<E> {
    pub fn new(source: E, count: isize) -> Self {
        Self::with_count(source, clamp_count(count))
    }

    pub(crate) fn with_count(source: E, skip_count: usize) -> Self {
        Self {
            source,
            skip_count,
            skipped: 0,
        }
    }

    fn pending(&self) -> usize {
        self.skip_count - self.skipped
    }

    /// `skip(a).skip(b)` is one `Skip(a + b)`.
    pub fn skip(self, count: isize) -> Skip<E> {
        let pending = self.pending().saturating_add(clamp_count(count));
        Skip::with_count(self.source, pending)
    }

    /// `skip(n).take(m)` fuses into `SkipTake`.
    pub fn take(self, count: isize) -> SkipTake<E> {
        let pending = self.pending();
        SkipTake::with_counts(self.source, pending, clamp_count(count))
    }
}

impl<E: ValueEnumerator> ValueEnumerator for Skip<E> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        while self.skipped < self.skip_count {
            if self.source.try_get_next().is_none() {
                self.skipped = self.skip_count;
                return None;
            }
            self.skipped += 1;
        }
        self.source.try_get_next()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        self.source
            .try_get_non_enumerated_count()
            .map(|c| c.saturating_sub(self.pending()))
    }

    fn try_get_span(&self) -> Option<&[E::Item]> {
        let span = self.source.try_get_span()?;
        Some(&span[self.pending().min(span.len())..])
    }

    fn try_copy_to(&mut self, destination: &mut Vec<E::Item>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let Some(upstream) = self.source.try_get_non_enumerated_count() else {
            return false;
        };
        let pending = self.pending();
        let Some((start, n)) = copy_window(upstream.saturating_sub(pending), offset, count) else {
            return false;
        };
        if n == 0 {
            return true;
        }
        self.source
            .try_copy_to(destination, Index::Start(pending + start), n)
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}
