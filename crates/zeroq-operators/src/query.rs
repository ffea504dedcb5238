//! Fluent builders and terminal operations for every enumerator.
//!
//! Builders wrap `self` in the next stage. Several stages shadow a builder
//! with an inherent method of the same name to fuse with what follows
//! (`Skip::take`, `Shuffle::take`, `Filter::map`); method resolution picks
//! the inherent one, so fusion needs no call-site changes.
//!
//! Terminals consume the chain, try the cheapest exact strategy first (span,
//! then copy-to, then pulling) and dispose the chain before returning.

use std::hash::Hash;

use zeroq_core::comparer::{DefaultComparer, KeyComparer};
use zeroq_core::config::QueryConfig;
use zeroq_core::numeric::Numeric;
use zeroq_core::random::RandomIndex;
use zeroq_core::{Error, Index, QueryRange, Result, ValueEnumerator, ValueIter};
use zeroq_mem::{ArrayPool, RingBuffer, SegmentedArrayBuilder};

use crate::chunk::Chunk;
use crate::clamp_count;
use crate::concat::Concat;
use crate::filter::Filter;
use crate::grouping::{Distinct, GroupBy, Lookup};
use crate::map::Map;
use crate::positional::{Skip, Take, TakeLast, TakeRange};
use crate::shuffle::Shuffle;

fn identity<T>(value: T) -> T {
    value
}

pub trait Query: ValueEnumerator + Sized {
    // ---- builders ----

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn map<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    /// Negative counts skip nothing.
    fn skip(self, count: isize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Negative counts take nothing.
    fn take(self, count: isize) -> Take<Self> {
        Take::new(self, count)
    }

    /// `take_range(Index::Start(2)..Index::End(2))` keeps everything but the first and last two.
    fn take_range(self, range: impl Into<QueryRange>) -> TakeRange<Self> {
        TakeRange::new(self, range)
    }

    fn take_range_in(self, range: impl Into<QueryRange>, pool: ArrayPool) -> TakeRange<Self> {
        TakeRange::new_in(self, range, pool)
    }

    fn take_last(self, count: isize) -> TakeLast<Self> {
        TakeLast::new(self, count)
    }

    fn take_last_in(self, count: isize, pool: ArrayPool) -> TakeLast<Self> {
        TakeLast::new_in(self, count, pool)
    }

    /// Everything but the last `count` elements: `take_range(0..^count)`.
    fn skip_last(self, count: isize) -> TakeRange<Self> {
        let range = QueryRange::new(Index::Start(0), Index::End(clamp_count(count)));
        TakeRange::new(self, range)
    }

    fn shuffle(self) -> Shuffle<Self> {
        Shuffle::new(self)
    }

    fn shuffle_with<R: RandomIndex>(self, rng: R) -> Shuffle<Self, R> {
        Shuffle::with_rng(self, rng)
    }

    fn shuffle_in<R: RandomIndex>(self, rng: R, pool: ArrayPool) -> Shuffle<Self, R> {
        Shuffle::with_rng_in(self, rng, pool)
    }

    /// Fails with `InvalidArgument` when `size == 0`.
    fn chunk(self, size: usize) -> Result<Chunk<Self>> {
        Chunk::new(self, size)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: ValueEnumerator<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        Distinct::new(self, DefaultComparer)
    }

    fn distinct_by<C>(self, comparer: C) -> Distinct<Self, C>
    where
        Self::Item: Clone,
        C: KeyComparer<Self::Item>,
    {
        Distinct::new(self, comparer)
    }

    /// Elements of `self` then `other`, each distinct value once, in
    /// first-seen order.
    fn union<B>(self, other: B) -> Distinct<Concat<Self, B>>
    where
        B: ValueEnumerator<Item = Self::Item>,
        Self::Item: Clone + Eq + Hash,
    {
        Distinct::new(Concat::new(self, other), DefaultComparer)
    }

    #[allow(clippy::type_complexity)]
    fn group_by<K, KF>(
        self,
        key: KF,
    ) -> GroupBy<Self, K, Self::Item, KF, fn(Self::Item) -> Self::Item, DefaultComparer>
    where
        KF: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        GroupBy::new(self, key, identity as fn(Self::Item) -> Self::Item, DefaultComparer)
    }

    fn group_by_with<K, V, KF, EF, C>(
        self,
        key: KF,
        element: EF,
        comparer: C,
    ) -> GroupBy<Self, K, V, KF, EF, C>
    where
        KF: FnMut(&Self::Item) -> K,
        EF: FnMut(Self::Item) -> V,
        C: KeyComparer<K>,
    {
        GroupBy::new(self, key, element, comparer)
    }

    // ---- terminals ----

    fn into_iterator(self) -> ValueIter<Self> {
        ValueIter::new(self)
    }

    /// Collect, preferring the span and then a single bulk copy.
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        if let Some(span) = self.try_get_span() {
            let out = span.to_vec();
            self.dispose();
            return out;
        }
        if let Some(n) = self.try_get_non_enumerated_count() {
            let mut out = Vec::with_capacity(n);
            if self.try_copy_to(&mut out, Index::Start(0), n) {
                self.dispose();
                return out;
            }
        }
        self.into_vec()
    }

    /// Collect by pulling; elements are moved, never cloned.
    fn into_vec(mut self) -> Vec<Self::Item> {
        let out = match self.try_get_non_enumerated_count() {
            Some(n) => {
                let mut out = Vec::with_capacity(n);
                while let Some(v) = self.try_get_next() {
                    out.push(v);
                }
                out
            }
            None => {
                let first = QueryConfig::global().segment_initial_capacity;
                let mut builder = SegmentedArrayBuilder::new(ArrayPool::shared(), first);
                while let Some(v) = self.try_get_next() {
                    builder.push(v);
                }
                builder.into_vec()
            }
        };
        self.dispose();
        out
    }

    fn to_boxed_slice(self) -> Box<[Self::Item]>
    where
        Self::Item: Clone,
    {
        self.to_vec().into_boxed_slice()
    }

    fn count(mut self) -> usize {
        if let Some(n) = self.try_get_non_enumerated_count() {
            self.dispose();
            return n;
        }
        let mut n = 0usize;
        while self.try_get_next().is_some() {
            n += 1;
        }
        self.dispose();
        n
    }

    fn count_by<P>(mut self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut n = 0usize;
        while let Some(v) = self.try_get_next() {
            if predicate(&v) {
                n = n
                    .checked_add(1)
                    .ok_or(Error::Overflow { operation: "count_by" })?;
            }
        }
        self.dispose();
        Ok(n)
    }

    fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = false;
        while let Some(v) = self.try_get_next() {
            if predicate(&v) {
                found = true;
                break;
            }
        }
        self.dispose();
        found
    }

    fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut holds = true;
        while let Some(v) = self.try_get_next() {
            if !predicate(&v) {
                holds = false;
                break;
            }
        }
        self.dispose();
        holds
    }

    fn first_or_none(mut self) -> Option<Self::Item> {
        let first = self.try_get_next();
        self.dispose();
        first
    }

    fn first(self) -> Result<Self::Item> {
        self.first_or_none().ok_or(Error::NoElements)
    }

    fn last_or_none(mut self) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        if let Some(span) = self.try_get_span() {
            let last = span.last().cloned();
            self.dispose();
            return last;
        }
        if let Some(n) = self.try_get_non_enumerated_count() {
            if n == 0 {
                self.dispose();
                return None;
            }
            let mut out = Vec::with_capacity(1);
            if self.try_copy_to(&mut out, Index::End(1), 1) {
                self.dispose();
                return out.pop();
            }
        }
        let mut last = None;
        while let Some(v) = self.try_get_next() {
            last = Some(v);
        }
        self.dispose();
        last
    }

    fn last(self) -> Result<Self::Item>
    where
        Self::Item: Clone,
    {
        self.last_or_none().ok_or(Error::NoElements)
    }

    /// `None` when `index` falls outside the sequence.
    fn element_at_or_none(mut self, index: impl Into<Index>) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        let index = index.into();
        if let Some(span) = self.try_get_span() {
            let found = index
                .resolve(span.len())
                .and_then(|i| span.get(i))
                .cloned();
            self.dispose();
            return found;
        }
        if let Some(n) = self.try_get_non_enumerated_count() {
            let Some(i) = index.resolve(n).filter(|&i| i < n) else {
                self.dispose();
                return None;
            };
            let mut out = Vec::with_capacity(1);
            if self.try_copy_to(&mut out, Index::Start(i), 1) {
                self.dispose();
                return out.pop();
            }
        }
        let found = match index {
            Index::Start(i) => {
                let mut found = None;
                let mut position = 0usize;
                while let Some(v) = self.try_get_next() {
                    if position == i {
                        found = Some(v);
                        break;
                    }
                    position += 1;
                }
                found
            }
            Index::End(0) => None,
            Index::End(i) => {
                let initial = QueryConfig::global().ring_buffer_initial_capacity;
                let mut window = RingBuffer::new(ArrayPool::shared(), initial, Some(i));
                while let Some(v) = self.try_get_next() {
                    window.push_back(v);
                }
                if window.len() == i {
                    window.pop_front()
                } else {
                    None
                }
            }
        };
        self.dispose();
        found
    }

    fn element_at(self, index: impl Into<Index>) -> Result<Self::Item>
    where
        Self::Item: Clone,
    {
        let index = index.into();
        self.element_at_or_none(index)
            .ok_or_else(|| Error::IndexOutOfRange {
                index: index.to_string(),
            })
    }

    /// `Ok(None)` for an empty sequence, an error for more than one element.
    fn single_or_none(mut self) -> Result<Option<Self::Item>> {
        if matches!(self.try_get_non_enumerated_count(), Some(n) if n > 1) {
            self.dispose();
            return Err(Error::MoreThanOneElement);
        }
        let result = match self.try_get_next() {
            None => Ok(None),
            Some(v) => match self.try_get_next() {
                None => Ok(Some(v)),
                Some(_) => Err(Error::MoreThanOneElement),
            },
        };
        self.dispose();
        result
    }

    fn single(self) -> Result<Self::Item> {
        self.single_or_none()?.ok_or(Error::NoElements)
    }

    fn aggregate<A, F>(mut self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = seed;
        while let Some(v) = self.try_get_next() {
            acc = f(acc, v);
        }
        self.dispose();
        acc
    }

    /// Checked sum; integer overflow is an error rather than a wrap.
    fn sum(mut self) -> Result<Self::Item>
    where
        Self::Item: Numeric,
    {
        let mut total = <Self::Item as Numeric>::zero();
        while let Some(v) = self.try_get_next() {
            match Numeric::checked_add(total, v) {
                Some(t) => total = t,
                None => {
                    self.dispose();
                    return Err(Error::Overflow { operation: "sum" });
                }
            }
        }
        self.dispose();
        Ok(total)
    }

    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Some(v) = self.try_get_next() {
            f(v);
        }
        self.dispose();
    }

    fn to_lookup<K, KF>(self, key: KF) -> Lookup<K, Self::Item>
    where
        KF: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        Lookup::from_enumerator(self, key, identity, DefaultComparer)
    }

    fn to_lookup_with<K, V, KF, EF>(self, key: KF, element: EF) -> Lookup<K, V>
    where
        KF: FnMut(&Self::Item) -> K,
        EF: FnMut(Self::Item) -> V,
        K: Eq + Hash,
    {
        Lookup::from_enumerator(self, key, element, DefaultComparer)
    }

    fn to_lookup_by<K, V, KF, EF, C>(self, key: KF, element: EF, comparer: C) -> Lookup<K, V, C>
    where
        KF: FnMut(&Self::Item) -> K,
        EF: FnMut(Self::Item) -> V,
        C: KeyComparer<K>,
    {
        Lookup::from_enumerator(self, key, element, comparer)
    }
}

impl<E: ValueEnumerator> Query for E {}
