//! FIFO ring buffer over rented storage.
//!
//! Starts small and doubles while it is below its bound. Once `len == bound`,
//! each `push_back` evicts and returns the oldest element.

use crate::pool::{ArrayPool, RentGuard};

pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
    bound: Option<usize>,
    guard: Option<RentGuard>,
    pool: ArrayPool,
}

impl<T> RingBuffer<T> {
    /// `bound = None` grows without limit and never evicts.
    pub fn new(pool: ArrayPool, initial_capacity: usize, bound: Option<usize>) -> Self {
        let cap = match bound {
            Some(b) => initial_capacity.min(b),
            None => initial_capacity,
        };
        let guard = pool.acquire_for::<Option<T>>(cap, "ring_buffer");
        let mut slots = Vec::with_capacity(cap);
        slots.resize_with(cap, || None);
        Self {
            slots,
            head: 0,
            len: 0,
            bound,
            guard: Some(guard),
            pool,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        matches!(self.bound, Some(b) if self.len == b)
    }

    /// Enqueue; returns the evicted oldest element when the bound is reached.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.bound == Some(0) {
            return Some(value);
        }
        if self.is_full() {
            let evicted = self.slots[self.head].replace(value);
            self.head = (self.head + 1) % self.slots.len();
            return evicted;
        }
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        None
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Drop the `n` oldest elements.
    pub fn discard_front(&mut self, n: usize) {
        for _ in 0..n.min(self.len) {
            self.pop_front();
        }
    }

    /// Element at logical position `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.slots.len()].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Drop the contents and return the rental. Idempotent.
    pub fn release(&mut self) {
        if self.guard.take().is_some() {
            self.slots = Vec::new();
            self.head = 0;
            self.len = 0;
        }
    }

    fn grow(&mut self) {
        let old_cap = self.slots.len();
        let mut new_cap = old_cap.saturating_mul(2).max(1);
        if let Some(b) = self.bound {
            new_cap = new_cap.min(b);
        }
        let mut slots: Vec<Option<T>> = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            slots.push(self.slots[(self.head + i) % old_cap].take());
        }
        slots.resize_with(new_cap, || None);
        // Return the old rental before accounting the replacement.
        self.guard = None;
        self.guard = Some(self.pool.acquire_for::<Option<T>>(new_cap, "ring_buffer"));
        self.slots = slots;
        self.head = 0;
    }
}
