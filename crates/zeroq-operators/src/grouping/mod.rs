//! Hash grouping: the `Lookup` table and the operators built on it.
//!
//! Tables use separate chaining over a power-of-two bucket array and grow to
//! the next power of two at least twice the size once the load factor would
//! pass 0.72. Keys the comparer reports as null hash to `0`.

mod distinct;
mod group_by;
mod lookup;

pub use distinct::Distinct;
pub use group_by::GroupBy;
pub use lookup::{Iter, Lookup};

use crate::source::VecSource;

const LOAD_FACTOR_PERCENT: usize = 72;

/// Whether adding one more entry to `entries` would exceed the load factor.
#[inline]
pub(crate) fn needs_resize(entries: usize, buckets: usize) -> bool {
    (entries + 1) * 100 > buckets * LOAD_FACTOR_PERCENT
}

#[inline]
pub(crate) fn bucket_index(hash: u64, buckets: usize) -> usize {
    (hash as usize) & (buckets - 1)
}

/// A key and every element that mapped to it, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    elements: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            elements: Vec::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[V] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.elements)
    }

    /// The elements as a query source.
    pub fn into_enumerator(self) -> VecSource<V> {
        VecSource::new(self.elements)
    }
}
