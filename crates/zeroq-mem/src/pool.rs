//! Array pool + RAII rental guards.
//!
//! Every buffer an operator holds past a single call is rented here, so the
//! pool can account for outstanding rentals and verify they all come back.
//! Dropping the guard returns the rental (panic-safe).

use std::mem::size_of;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::rented::RentedArray;

static SHARED_POOL: Lazy<ArrayPool> = Lazy::new(ArrayPool::new);

/// Shared inner state for the pool.
#[derive(Default)]
struct PoolInner {
    rentals: AtomicUsize,
    returns: AtomicUsize,
    outstanding_bytes: AtomicUsize,
    peak_bytes: AtomicUsize,
}

impl PoolInner {
    fn acquire(&self, bytes: usize) {
        self.rentals.fetch_add(1, Ordering::AcqRel);
        let used = self.outstanding_bytes.fetch_add(bytes, Ordering::AcqRel) + bytes;
        let mut cur = self.peak_bytes.load(Ordering::Relaxed);
        while used > cur {
            match self.peak_bytes.compare_exchange(
                cur,
                used,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => cur = observed,
            }
        }
    }

    fn release(&self, bytes: usize) {
        self.outstanding_bytes.fetch_sub(bytes, Ordering::AcqRel);
        self.returns.fetch_add(1, Ordering::AcqRel);
    }
}

/// Snapshot of pool accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    pub rentals: usize,
    pub returns: usize,
    pub outstanding_bytes: usize,
    pub peak_bytes: usize,
}

impl PoolStats {
    pub fn outstanding_rentals(&self) -> usize {
        self.rentals.saturating_sub(self.returns)
    }

    /// Every rental has been returned.
    pub fn is_balanced(&self) -> bool {
        self.rentals == self.returns && self.outstanding_bytes == 0
    }
}

/// Cheap clonable pool handle. Clones share accounting.
///
/// Simple pool facade: storage comes from the global allocator and is freed on
/// return. Rentals are counted so leaks and double returns are observable.
#[derive(Clone, Default)]
pub struct ArrayPool {
    inner: Arc<PoolInner>,
}

impl std::fmt::Debug for ArrayPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPool").field("stats", &self.stats()).finish()
    }
}

impl ArrayPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default pool used by operators that are not given one.
    pub fn shared() -> ArrayPool {
        SHARED_POOL.clone()
    }

    /// Rent an empty array able to hold `capacity` elements without growing.
    pub fn rent<T>(&self, capacity: usize, tag: &'static str) -> RentedArray<T> {
        RentedArray::new(self.clone(), capacity, tag)
    }

    pub(crate) fn acquire(&self, bytes: usize, _tag: &'static str) -> RentGuard {
        self.inner.acquire(bytes);
        #[cfg(feature = "tracing")]
        tracing::trace!(tag = _tag, bytes, "rent");
        RentGuard {
            inner: Arc::clone(&self.inner),
            bytes,
        }
    }

    /// Account a rental of `capacity` elements of `T`.
    pub(crate) fn acquire_for<T>(&self, capacity: usize, tag: &'static str) -> RentGuard {
        self.acquire(capacity.saturating_mul(size_of::<T>()), tag)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            rentals: self.inner.rentals.load(Ordering::Acquire),
            returns: self.inner.returns.load(Ordering::Acquire),
            outstanding_bytes: self.inner.outstanding_bytes.load(Ordering::Acquire),
            peak_bytes: self.inner.peak_bytes.load(Ordering::Acquire),
        }
    }

    pub fn same_pool(&self, other: &ArrayPool) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// RAII guard for one rental. Dropping it returns the rental to the pool.
pub struct RentGuard {
    inner: Arc<PoolInner>,
    bytes: usize,
}

impl RentGuard {
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Drop for RentGuard {
    fn drop(&mut self) {
        // NOTE: do not log here to keep drop path fast.
        self.inner.release(self.bytes);
        self.bytes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_drop_returns_rental() {
        let pool = ArrayPool::new();
        {
            let g = pool.acquire(64, "test");
            assert_eq!(g.bytes(), 64);
            let stats = pool.stats();
            assert_eq!(stats.rentals, 1);
            assert_eq!(stats.outstanding_bytes, 64);
            assert!(!stats.is_balanced());
        }
        let stats = pool.stats();
        assert!(stats.is_balanced());
        assert_eq!(stats.peak_bytes, 64);
    }

    #[test]
    fn clones_share_accounting() {
        let pool = ArrayPool::new();
        let other = pool.clone();
        let _g = other.acquire_for::<u64>(4, "test");
        assert_eq!(pool.stats().outstanding_bytes, 32);
        assert!(pool.same_pool(&other));
        assert!(!pool.same_pool(&ArrayPool::new()));
    }
}
