//! Rented array box: pooled storage with a logical length distinct from its
//! rented capacity.

use std::ops::{Deref, DerefMut};

use crate::pool::{ArrayPool, RentGuard};

/// Growable array whose capacity is accounted against an `ArrayPool`.
///
/// Growth doubles. The previous rental is returned before the replacement is
/// accounted. `release` (or drop) returns the rental exactly once.
pub struct RentedArray<T> {
    buf: Vec<T>,
    capacity: usize,
    guard: Option<RentGuard>,
    pool: ArrayPool,
    tag: &'static str,
}

impl<T> RentedArray<T> {
    pub(crate) fn new(pool: ArrayPool, capacity: usize, tag: &'static str) -> Self {
        let guard = pool.acquire_for::<T>(capacity, tag);
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            guard: Some(guard),
            pool,
            tag,
        }
    }

    /// Rented capacity (what the pool accounts), not the allocator's.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_released(&self) -> bool {
        self.guard.is_none()
    }

    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.capacity || self.guard.is_none() {
            self.grow(self.buf.len() + 1);
        }
        self.buf.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.buf[index], value)
    }

    /// Move all elements onto the end of `out`, leaving this array empty.
    pub fn drain_into(&mut self, out: &mut Vec<T>) {
        out.append(&mut self.buf);
    }

    /// Ensure room for at least `min_capacity` elements, doubling from the
    /// current capacity.
    pub fn grow(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity && self.guard.is_some() {
            return;
        }
        let new_cap = self.capacity.saturating_mul(2).max(min_capacity).max(4);
        // Return the old rental before accounting the replacement.
        self.guard = None;
        let guard = self.pool.acquire_for::<T>(new_cap, self.tag);
        self.buf.reserve_exact(new_cap - self.buf.len());
        self.capacity = new_cap;
        self.guard = Some(guard);
    }

    /// Drop the contents and return the rental. Idempotent.
    pub fn release(&mut self) {
        if self.guard.take().is_some() {
            self.buf = Vec::new();
            self.capacity = 0;
        }
    }
}

impl<T> Deref for RentedArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> DerefMut for RentedArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RentedArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RentedArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("tag", &self.tag)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_returns_previous_rental() {
        let pool = ArrayPool::new();
        let mut arr = pool.rent::<u32>(2, "test");
        arr.push(1);
        arr.push(2);
        arr.push(3);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(&arr[..], &[1, 2, 3]);

        let stats = pool.stats();
        assert_eq!(stats.rentals, 2);
        assert_eq!(stats.returns, 1);
        assert_eq!(stats.outstanding_bytes, 16);

        drop(arr);
        assert!(pool.stats().is_balanced());
    }

    #[test]
    fn release_is_idempotent() {
        let pool = ArrayPool::new();
        let mut arr = pool.rent::<u8>(8, "test");
        arr.push(7);
        arr.release();
        arr.release();
        assert!(arr.is_empty());
        drop(arr);
        let stats = pool.stats();
        assert_eq!(stats.rentals, 1);
        assert_eq!(stats.returns, 1);
    }
}
