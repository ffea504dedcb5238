//! Fused `skip(n).take(m)` / `take(m).skip(n)`.
//!
//! Observably identical to the unfused chain; it only avoids the extra stage.

use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

use crate::clamp_count;

pub struct SkipTake<E> {
    source: E,
    skip_count: usize,
    skipped: usize,
    take_count: usize,
    taken: usize,
}

impl<E: ValueEnumerator> SkipTake<E> {
    pub fn new(source: E, skip: isize, take: isize) -> Self {
        Self::with_counts(source, clamp_count(skip), clamp_count(take))
    }

    pub(crate) fn with_counts(source: E, skip_count: usize, take_count: usize) -> Self {
        Self {
            source,
            skip_count,
            skipped: 0,
            take_count,
            taken: 0,
        }
    }

    fn pending_skip(&self) -> usize {
        self.skip_count - self.skipped
    }

    fn remaining_take(&self) -> usize {
        self.take_count - self.taken
    }

    /// Narrow the take window.
    pub fn take(self, count: isize) -> SkipTake<E> {
        let take = self.remaining_take().min(clamp_count(count));
        let skip = self.pending_skip();
        SkipTake::with_counts(self.source, skip, take)
    }

    /// Skip further into the take window.
    pub fn skip(self, count: isize) -> SkipTake<E> {
        let extra = clamp_count(count);
        let skip = self.pending_skip().saturating_add(extra);
        let take = self.remaining_take().saturating_sub(extra);
        SkipTake::with_counts(self.source, skip, take)
    }
}

impl<E: ValueEnumerator> ValueEnumerator for SkipTake<E> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if self.taken >= self.take_count {
            return None;
        }
        while self.skipped < self.skip_count {
            if self.source.try_get_next().is_none() {
                self.skipped = self.skip_count;
                self.taken = self.take_count;
                return None;
            }
            self.skipped += 1;
        }
        match self.source.try_get_next() {
            Some(v) => {
                self.taken += 1;
                Some(v)
            }
            None => {
                self.taken = self.take_count;
                None
            }
        }
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        self.source
            .try_get_non_enumerated_count()
            .map(|c| c.saturating_sub(self.pending_skip()).min(self.remaining_take()))
    }

    fn try_get_span(&self) -> Option<&[E::Item]> {
        let span = self.source.try_get_span()?;
        let start = self.pending_skip().min(span.len());
        let end = start + self.remaining_take().min(span.len() - start);
        Some(&span[start..end])
    }

    fn try_copy_to(&mut self, destination: &mut Vec<E::Item>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let Some(ours) = self.try_get_non_enumerated_count() else {
            return false;
        };
        let Some((start, n)) = copy_window(ours, offset, count) else {
            return false;
        };
        if n == 0 {
            return true;
        }
        let pending = self.pending_skip();
        self.source
            .try_copy_to(destination, Index::Start(pending + start), n)
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}
