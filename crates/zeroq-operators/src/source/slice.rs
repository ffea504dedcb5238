//! Contiguous sources: borrowed slices and owned vectors.

use std::vec;

use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

/// Yields clones of a borrowed slice.
pub struct SliceSource<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceSource<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    fn remaining(&self) -> &'a [T] {
        &self.slice[self.index..]
    }
}

impl<'a, T: Clone> ValueEnumerator for SliceSource<'a, T> {
    type Item = T;

    fn try_get_next(&mut self) -> Option<T> {
        let v = self.slice.get(self.index)?.clone();
        self.index += 1;
        Some(v)
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.slice.len() - self.index)
    }

    fn try_get_span(&self) -> Option<&[T]> {
        Some(self.remaining())
    }

    fn try_copy_to(&mut self, destination: &mut Vec<T>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let rest = self.remaining();
        match copy_window(rest.len(), offset, count) {
            Some((start, n)) => {
                destination.extend_from_slice(&rest[start..start + n]);
                true
            }
            None => false,
        }
    }
}

/// Owns a vector and moves its elements out in order.
pub struct VecSource<T> {
    iter: vec::IntoIter<T>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            iter: items.into_iter(),
        }
    }
}

impl<T> ValueEnumerator for VecSource<T> {
    type Item = T;

    fn try_get_next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.iter.len())
    }

    fn try_get_span(&self) -> Option<&[T]> {
        Some(self.iter.as_slice())
    }

    fn try_copy_to(&mut self, destination: &mut Vec<T>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let rest = self.iter.as_slice();
        match copy_window(rest.len(), offset, count) {
            Some((start, n)) => {
                destination.extend_from_slice(&rest[start..start + n]);
                true
            }
            None => false,
        }
    }

    fn dispose(&mut self) {
        // Drop what was never pulled.
        self.iter = Vec::new().into_iter();
    }
}
