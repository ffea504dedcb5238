//! Builder for sequences of unknown length.
//!
//! Elements land in rented segments whose sizes double, so nothing already
//! written is ever copied until the final exactly-sized `Vec` is assembled.

use crate::pool::ArrayPool;
use crate::rented::RentedArray;

pub struct SegmentedArrayBuilder<T> {
    segments: Vec<RentedArray<T>>,
    count: usize,
    next_capacity: usize,
    pool: ArrayPool,
}

impl<T> SegmentedArrayBuilder<T> {
    pub fn new(pool: ArrayPool, first_segment: usize) -> Self {
        Self {
            segments: Vec::new(),
            count: 0,
            next_capacity: first_segment.max(1),
            pool,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn push(&mut self, value: T) {
        let needs_segment = match self.segments.last() {
            Some(seg) => seg.len() == seg.capacity(),
            None => true,
        };
        if needs_segment {
            let cap = self.next_capacity;
            self.next_capacity = cap.saturating_mul(2);
            self.segments.push(self.pool.rent(cap, "segment"));
        }
        if let Some(seg) = self.segments.last_mut() {
            seg.push(value);
            self.count += 1;
        }
    }

    /// Concatenate all segments into one `Vec` sized exactly to the content.
    /// Every segment rental is returned.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.count);
        for seg in self.segments.iter_mut() {
            seg.drain_into(&mut out);
            seg.release();
        }
        out
    }
}

impl<T> Extend<T> for SegmentedArrayBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_double_and_concatenate_in_order() {
        let pool = ArrayPool::new();
        let mut b = SegmentedArrayBuilder::new(pool.clone(), 2);
        b.extend(0..11);
        // 2 + 4 + 8
        assert_eq!(b.segment_count(), 3);
        assert_eq!(b.len(), 11);
        let v = b.into_vec();
        assert_eq!(v, (0..11).collect::<Vec<_>>());
        assert!(pool.stats().is_balanced());
    }
}
