//! Equality/hash capability injected into lookups, grouping and set operators.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rustc_hash::FxHasher;

/// Key equality + hashing.
///
/// Keys that report `is_null` always hash to `0` inside the lookup engine;
/// `equals` must still be consistent for them (null equals null only).
pub trait KeyComparer<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;
    fn hash(&self, key: &K) -> u64;
    fn is_null(&self, _key: &K) -> bool {
        false
    }
}

/// Structural comparer over `Eq + Hash`, hashed with `FxHasher`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<K: Eq + Hash + ?Sized> KeyComparer<K> for DefaultComparer {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash(&self, key: &K) -> u64 {
        let mut h = FxHasher::default();
        key.hash(&mut h);
        h.finish()
    }
}

/// Comparer for `Option<K>` keys where `None` is the null key.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionComparer<C = DefaultComparer> {
    inner: C,
}

impl<C> OptionComparer<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<K, C: KeyComparer<K>> KeyComparer<Option<K>> for OptionComparer<C> {
    fn equals(&self, a: &Option<K>, b: &Option<K>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.inner.equals(a, b),
            _ => false,
        }
    }

    fn hash(&self, key: &Option<K>) -> u64 {
        match key {
            Some(k) => self.inner.hash(k),
            None => 0,
        }
    }

    fn is_null(&self, key: &Option<K>) -> bool {
        key.is_none()
    }
}

/// Comparer built from a projection: keys compare by `project(key)`.
pub struct ProjectionComparer<F, P> {
    project: F,
    _marker: PhantomData<fn() -> P>,
}

impl<F, P> ProjectionComparer<F, P> {
    pub fn new(project: F) -> Self {
        Self {
            project,
            _marker: PhantomData,
        }
    }
}

impl<K, P, F> KeyComparer<K> for ProjectionComparer<F, P>
where
    F: Fn(&K) -> P,
    P: Eq + Hash,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.project)(a) == (self.project)(b)
    }

    fn hash(&self, key: &K) -> u64 {
        <DefaultComparer as KeyComparer<P>>::hash(&DefaultComparer, &(self.project)(key))
    }
}
