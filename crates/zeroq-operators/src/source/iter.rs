//! Sources over arbitrary iterators, plus `repeat` and `empty`.

use std::marker::PhantomData;

use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

/// One-shot pull source. Never reports a count, even when the iterator's
/// size hint looks exact.
pub struct IterSource<I> {
    iter: I,
    finished: bool,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            finished: false,
        }
    }
}

impl<I: Iterator> ValueEnumerator for IterSource<I> {
    type Item = I::Item;

    fn try_get_next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        let next = self.iter.next();
        if next.is_none() {
            self.finished = true;
        }
        next
    }
}

/// Source over an `ExactSizeIterator`; the count comes from `len()`.
pub struct ExactIterSource<I> {
    iter: I,
}

impl<I: ExactSizeIterator> ExactIterSource<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: ExactSizeIterator> ValueEnumerator for ExactIterSource<I> {
    type Item = I::Item;

    fn try_get_next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// `count` clones of one value.
pub struct RepeatSource<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> RepeatSource<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self {
            value,
            remaining: count,
        }
    }
}

impl<T: Clone> ValueEnumerator for RepeatSource<T> {
    type Item = T;

    fn try_get_next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.remaining)
    }

    fn try_copy_to(&mut self, destination: &mut Vec<T>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        match copy_window(self.remaining, offset, count) {
            Some((_, n)) => {
                destination.extend(std::iter::repeat(self.value.clone()).take(n));
                true
            }
            None => false,
        }
    }
}

pub struct EmptySource<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for EmptySource<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> ValueEnumerator for EmptySource<T> {
    type Item = T;

    fn try_get_next(&mut self) -> Option<T> {
        None
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(0)
    }

    fn try_get_span(&self) -> Option<&[T]> {
        Some(&[])
    }

    fn try_copy_to(&mut self, _destination: &mut Vec<T>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        copy_window(0, offset, count).is_some()
    }
}
