//! Insertion-ordered multimap from key to grouping.
//!
//! Groups live in an arena. Each bucket heads a singly linked chain through
//! `next_in_bucket`; separately, every group sits on a circular list through
//! `next_in_order`, rooted at `last`, so `last.next_in_order` is the first
//! group ever inserted. Iteration and resize walk that list from first to
//! last.

use std::fmt;

use zeroq_core::comparer::{DefaultComparer, KeyComparer};
use zeroq_core::config::QueryConfig;
use zeroq_core::ValueEnumerator;

use crate::grouping::{bucket_index, needs_resize, Grouping};

struct Node<K, V> {
    grouping: Grouping<K, V>,
    hash: u64,
    next_in_bucket: Option<usize>,
    next_in_order: usize,
}

pub struct Lookup<K, V, C = DefaultComparer> {
    comparer: C,
    nodes: Vec<Node<K, V>>,
    buckets: Vec<Option<usize>>,
    last: Option<usize>,
}

impl<K, V> Lookup<K, V, DefaultComparer>
where
    DefaultComparer: KeyComparer<K>,
{
    pub fn new() -> Self {
        Self::with_comparer(DefaultComparer)
    }
}

impl<K, V> Default for Lookup<K, V, DefaultComparer>
where
    DefaultComparer: KeyComparer<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparer<K>> Lookup<K, V, C> {
    pub fn with_comparer(comparer: C) -> Self {
        let buckets = QueryConfig::global().lookup_bucket_count();
        Self {
            comparer,
            nodes: Vec::new(),
            buckets: vec![None; buckets],
            last: None,
        }
    }

    /// Build from every element of `source`.
    pub fn from_enumerator<E, KF, EF>(mut source: E, mut key: KF, mut element: EF, comparer: C) -> Self
    where
        E: ValueEnumerator,
        KF: FnMut(&E::Item) -> K,
        EF: FnMut(E::Item) -> V,
    {
        let mut lookup = Self::with_comparer(comparer);
        while let Some(item) = source.try_get_next() {
            let k = key(&item);
            lookup.add(k, element(item));
        }
        source.dispose();
        lookup
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn hash_of(&self, key: &K) -> u64 {
        if self.comparer.is_null(key) {
            0
        } else {
            self.comparer.hash(key)
        }
    }

    fn find(&self, key: &K, hash: u64) -> Option<usize> {
        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())];
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            if node.hash == hash && self.comparer.equals(&node.grouping.key, key) {
                return Some(i);
            }
            cursor = node.next_in_bucket;
        }
        None
    }

    /// Append `value` to the grouping for `key`, creating it on first sight.
    pub fn add(&mut self, key: K, value: V) {
        let hash = self.hash_of(&key);
        let index = match self.find(&key, hash) {
            Some(i) => i,
            None => self.insert_group(key, hash),
        };
        self.nodes[index].grouping.elements.push(value);
    }

    fn insert_group(&mut self, key: K, hash: u64) -> usize {
        if needs_resize(self.nodes.len(), self.buckets.len()) {
            self.resize();
        }
        let index = self.nodes.len();
        let bucket = bucket_index(hash, self.buckets.len());
        let next_in_order = match self.last {
            Some(last) => std::mem::replace(&mut self.nodes[last].next_in_order, index),
            None => index,
        };
        self.nodes.push(Node {
            grouping: Grouping::new(key),
            hash,
            next_in_bucket: self.buckets[bucket],
            next_in_order,
        });
        self.buckets[bucket] = Some(index);
        self.last = Some(index);
        index
    }

    fn resize(&mut self) {
        let new_len = (self.buckets.len() * 2).next_power_of_two();
        debug_op!(groups = self.nodes.len(), from = self.buckets.len(), to = new_len, "lookup: resize");
        let mut buckets = vec![None; new_len];
        for i in self.order() {
            let bucket = bucket_index(self.nodes[i].hash, new_len);
            self.nodes[i].next_in_bucket = buckets[bucket];
            buckets[bucket] = Some(i);
        }
        self.buckets = buckets;
    }

    /// Arena indices in insertion order.
    fn order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if let Some(last) = self.last {
            let mut i = last;
            loop {
                i = self.nodes[i].next_in_order;
                order.push(i);
                if i == last {
                    break;
                }
            }
        }
        order
    }

    pub fn get(&self, key: &K) -> Option<&Grouping<K, V>> {
        let hash = self.hash_of(key);
        self.find(key, hash).map(|i| &self.nodes[i].grouping)
    }

    /// Elements for `key`; empty when the key was never added.
    pub fn values(&self, key: &K) -> &[V] {
        match self.get(key) {
            Some(g) => g.elements(),
            None => &[],
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Groupings from first inserted to last.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            lookup: self,
            next: self.last.map(|l| self.nodes[l].next_in_order),
            remaining: self.nodes.len(),
        }
    }

    /// Owned groupings in insertion order.
    pub fn into_groupings(self) -> Vec<Grouping<K, V>> {
        let order = self.order();
        let mut slots: Vec<Option<Grouping<K, V>>> =
            self.nodes.into_iter().map(|n| Some(n.grouping)).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }
}

pub struct Iter<'a, K, V, C> {
    lookup: &'a Lookup<K, V, C>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = &'a Grouping<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.next?;
        let node = &self.lookup.nodes[i];
        self.remaining -= 1;
        self.next = Some(node.next_in_order);
        Some(&node.grouping)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C: KeyComparer<K>> IntoIterator for &'a Lookup<K, V, C> {
    type Item = &'a Grouping<K, V>;
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: KeyComparer<K>> fmt::Debug for Lookup<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|g| (g.key(), g.elements())))
            .finish()
    }
}
