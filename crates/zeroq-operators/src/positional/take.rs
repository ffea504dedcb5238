use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

use crate::clamp_count;
use crate::positional::SkipTake;

/// Yields at most `take_count` elements.
pub struct Take<E> {
    source: E,
    take_count: usize,
    index: usize,
}

impl<E: ValueEnumerator> Take<E> {
    pub fn new(source: E, count: isize) -> Self {
        Self::with_count(source, clamp_count(count))
    }

    pub(crate) fn with_count(source: E, take_count: usize) -> Self {
        Self {
            source,
            take_count,
            index: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.take_count - self.index
    }

    /// `take(a).take(b)` is one `Take(min(a, b))`.
    pub fn take(self, count: isize) -> Take<E> {
        let remaining = self.remaining().min(clamp_count(count));
        Take::with_count(self.source, remaining)
    }

    /// `take(m).skip(n)` keeps `[n, m)`: a `SkipTake(n, m - n)`.
    pub fn skip(self, count: isize) -> SkipTake<E> {
        let skip = clamp_count(count);
        let remaining = self.remaining();
        SkipTake::with_counts(self.source, skip, remaining.saturating_sub(skip))
    }
}

impl<E: ValueEnumerator> ValueEnumerator for Take<E> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if self.index >= self.take_count {
            return None;
        }
        match self.source.try_get_next() {
            Some(v) => {
                self.index += 1;
                Some(v)
            }
            None => {
                self.index = self.take_count;
                None
            }
        }
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        self.source
            .try_get_non_enumerated_count()
            .map(|c| c.min(self.remaining()))
    }

    fn try_get_span(&self) -> Option<&[E::Item]> {
        let span = self.source.try_get_span()?;
        Some(&span[..self.remaining().min(span.len())])
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
        self.source.try_copy_to(destination, Index::Start(start), n)
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}
