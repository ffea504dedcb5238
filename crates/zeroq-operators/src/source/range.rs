//! Arithmetic progressions over any `Numeric` type.

use zeroq_core::index::copy_window;
use zeroq_core::numeric::Numeric;
use zeroq_core::{Error, Index, Result, ValueEnumerator};

/// `start, start + 1, ..., start + (count - 1)`.
pub struct RangeSource<N> {
    next: N,
    remaining: usize,
}

impl<N: Numeric> RangeSource<N> {
    /// Fails when the last element is not representable in `N`.
    pub fn new(start: N, count: usize) -> Result<Self> {
        if count > 0 {
            let last = N::from_usize(count - 1).and_then(|span| start.checked_add(span));
            if last.is_none() {
                return Err(Error::invalid_argument(
                    "count",
                    format!("range of {count} from {start:?} overflows"),
                ));
            }
        }
        Ok(Self {
            next: start,
            remaining: count,
        })
    }

    fn nth_from_current(&self, offset: usize) -> Option<N> {
        N::from_usize(offset).and_then(|o| self.next.checked_add(o))
    }
}

impl<N: Numeric> ValueEnumerator for RangeSource<N> {
    type Item = N;

    fn try_get_next(&mut self) -> Option<N> {
        if self.remaining == 0 {
            return None;
        }
        let v = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(n) = v.checked_add(N::one()) {
                self.next = n;
            }
        }
        Some(v)
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        Some(self.remaining)
    }

    fn try_copy_to(&mut self, destination: &mut Vec<N>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let Some((start, n)) = copy_window(self.remaining, offset, count) else {
            return false;
        };
        if n == 0 {
            return true;
        }
        let Some(mut value) = self.nth_from_current(start) else {
            return false;
        };
        destination.reserve(n);
        // Plain scalar fill; every value in the window was validated at construction.
        for i in 0..n {
            destination.push(value);
            if i + 1 < n {
                match value.checked_add(N::one()) {
                    Some(v) => value = v,
                    None => break,
                }
            }
        }
        true
    }
}

/// `start, start + step, ...` while not past `end` (inclusive), in the
/// direction of `step`.
pub struct SequenceSource<N> {
    current: N,
    end: N,
    step: N,
    ascending: bool,
    done: bool,
}

impl<N: Numeric> SequenceSource<N> {
    pub fn new(start: N, end: N, step: N) -> Result<Self> {
        let zero = N::zero();
        if step == zero || step.partial_cmp(&zero).is_none() {
            return Err(Error::invalid_argument("step", "step must be non-zero"));
        }
        let ascending = step > zero;
        let empty = if ascending { start > end } else { start < end };
        Ok(Self {
            current: start,
            end,
            step,
            ascending,
            done: empty,
        })
    }
}

impl<N: Numeric> ValueEnumerator for SequenceSource<N> {
    type Item = N;

    fn try_get_next(&mut self) -> Option<N> {
        if self.done {
            return None;
        }
        let v = self.current;
        match v.checked_add(self.step) {
            Some(n) if self.ascending && n <= self.end => self.current = n,
            Some(n) if !self.ascending && n >= self.end => self.current = n,
            _ => self.done = true,
        }
        Some(v)
    }
}
