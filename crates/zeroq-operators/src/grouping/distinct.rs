use zeroq_core::comparer::{DefaultComparer, KeyComparer};
use zeroq_core::config::QueryConfig;
use zeroq_core::ValueEnumerator;

use crate::grouping::{bucket_index, needs_resize};

struct Entry<T> {
    value: T,
    hash: u64,
    next_in_bucket: Option<usize>,
}

/// Chained hash set with the lookup table's bucket discipline.
struct SeenSet<T, C> {
    comparer: C,
    entries: Vec<Entry<T>>,
    buckets: Vec<Option<usize>>,
}

impl<T, C: KeyComparer<T>> SeenSet<T, C> {
    fn new(comparer: C) -> Self {
        Self {
            comparer,
            entries: Vec::new(),
            buckets: vec![None; QueryConfig::global().lookup_bucket_count()],
        }
    }

    fn hash_of(&self, value: &T) -> u64 {
        if self.comparer.is_null(value) {
            0
        } else {
            self.comparer.hash(value)
        }
    }

    /// `true` when `value` was not present and has been added.
    fn insert(&mut self, value: T) -> bool {
        let hash = self.hash_of(&value);
        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())];
        while let Some(i) = cursor {
            let entry = &self.entries[i];
            if entry.hash == hash && self.comparer.equals(&entry.value, &value) {
                return false;
            }
            cursor = entry.next_in_bucket;
        }
        if needs_resize(self.entries.len(), self.buckets.len()) {
            self.resize();
        }
        let bucket = bucket_index(hash, self.buckets.len());
        self.entries.push(Entry {
            value,
            hash,
            next_in_bucket: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(self.entries.len() - 1);
        true
    }

    fn resize(&mut self) {
        let new_len = (self.buckets.len() * 2).next_power_of_two();
        debug_op!(entries = self.entries.len(), from = self.buckets.len(), to = new_len, "distinct: resize");
        let mut buckets = vec![None; new_len];
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let bucket = bucket_index(entry.hash, new_len);
            entry.next_in_bucket = buckets[bucket];
            buckets[bucket] = Some(i);
        }
        self.buckets = buckets;
    }

    fn clear(&mut self) {
        self.entries = Vec::new();
        self.buckets = vec![None; 1];
    }
}

/// Streaming de-duplication: each element is yielded the first time it is
/// seen, in upstream order.
pub struct Distinct<E: ValueEnumerator, C = DefaultComparer> {
    source: E,
    seen: SeenSet<E::Item, C>,
}

impl<E, C> Distinct<E, C>
where
    E: ValueEnumerator,
    E::Item: Clone,
    C: KeyComparer<E::Item>,
{
    pub fn new(source: E, comparer: C) -> Self {
        Self {
            source,
            seen: SeenSet::new(comparer),
        }
    }
}

impl<E, C> ValueEnumerator for Distinct<E, C>
where
    E: ValueEnumerator,
    E::Item: Clone,
    C: KeyComparer<E::Item>,
{
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        loop {
            let v = self.source.try_get_next()?;
            if self.seen.insert(v.clone()) {
                return Some(v);
            }
        }
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        // Nothing left upstream means nothing left here.
        match self.source.try_get_non_enumerated_count() {
            Some(0) => Some(0),
            _ => None,
        }
    }

    fn dispose(&mut self) {
        self.seen.clear();
        self.source.dispose();
    }
}
