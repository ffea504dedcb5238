//! `take(range)` where either bound may count from the end.
//!
//! With a known upstream count the window is resolved once and the stage
//! degrades to a plain skip/take. Otherwise the range shape picks a mode:
//!
//! - `s..e`: skip `s`, yield `e - s`.
//! - `s..^e`: skip `s`, then keep a window of the last `e` elements; every
//!   element pushed out of that window is yielded.
//! - `^s..x`: keep the trailing `s` elements until the end is seen, then
//!   resolve the window against the now-known length and replay from the queue.

use zeroq_core::config::QueryConfig;
use zeroq_core::index::copy_window;
use zeroq_core::{Index, QueryRange, ValueEnumerator};
use zeroq_mem::{ArrayPool, RingBuffer};

enum Mode<T> {
    Uninitialized,
    Direct { skip: usize, remaining: usize },
    Sliding { skip: usize, window: RingBuffer<T> },
    Replay { queue: RingBuffer<T>, remaining: usize },
    Done,
}

pub struct TakeRange<E: ValueEnumerator> {
    source: E,
    range: QueryRange,
    mode: Mode<E::Item>,
    pool: ArrayPool,
}

impl<E: ValueEnumerator> TakeRange<E> {
    pub fn new(source: E, range: impl Into<QueryRange>) -> Self {
        Self::new_in(source, range, ArrayPool::shared())
    }

    /// Rent the trailing window from `pool`.
    pub fn new_in(source: E, range: impl Into<QueryRange>, pool: ArrayPool) -> Self {
        Self {
            source,
            range: range.into(),
            mode: Mode::Uninitialized,
            pool,
        }
    }

    pub fn range(&self) -> QueryRange {
        self.range
    }

    fn ring(&self, bound: usize) -> RingBuffer<E::Item> {
        let initial = QueryConfig::global().ring_buffer_initial_capacity;
        RingBuffer::new(self.pool.clone(), initial, Some(bound))
    }

    fn resolve(&mut self) {
        if let Some(count) = self.source.try_get_non_enumerated_count() {
            let (skip, remaining) = self.range.window(count);
            trace_op!(range = %self.range, count, skip, remaining, "take_range: direct");
            self.mode = Mode::Direct { skip, remaining };
            return;
        }
        self.mode = match (self.range.start, self.range.end) {
            (Index::Start(s), Index::Start(e)) => Mode::Direct {
                skip: s,
                remaining: e.saturating_sub(s),
            },
            (Index::Start(s), Index::End(e)) => {
                trace_op!(range = %self.range, "take_range: sliding window");
                Mode::Sliding {
                    skip: s,
                    window: self.ring(e),
                }
            }
            (Index::End(0), _) => Mode::Done,
            (Index::End(s), end) => self.fill_trailing(s, end),
        };
    }

    /// Drain the upstream keeping its last `s` elements, then resolve the
    /// window against the observed length.
    fn fill_trailing(&mut self, s: usize, end: Index) -> Mode<E::Item> {
        let mut queue = self.ring(s);
        let mut len = 0usize;
        while let Some(v) = self.source.try_get_next() {
            queue.push_back(v);
            len += 1;
            // `^s..e` is empty once the start can no longer fall before `e`.
            if let Index::Start(e) = end {
                if len >= e.saturating_add(s) {
                    queue.release();
                    trace_op!(range = %self.range, len, "take_range: empty window");
                    return Mode::Done;
                }
            }
        }
        let (start, remaining) = self.range.window(len);
        let base = len - queue.len();
        queue.discard_front(start.saturating_sub(base));
        trace_op!(range = %self.range, len, start, remaining, "take_range: replay");
        Mode::Replay { queue, remaining }
    }

    fn finish(&mut self) {
        if let Mode::Sliding { window: q, .. } | Mode::Replay { queue: q, .. } = &mut self.mode {
            q.release();
        }
        self.mode = Mode::Done;
    }
}

impl<E: ValueEnumerator> ValueEnumerator for TakeRange<E> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if matches!(self.mode, Mode::Uninitialized) {
            self.resolve();
        }
        let next = match &mut self.mode {
            Mode::Uninitialized | Mode::Done => return None,
            Mode::Direct { skip, remaining } => {
                if *remaining == 0 {
                    None
                } else {
                    let mut next = None;
                    while *skip > 0 {
                        if self.source.try_get_next().is_none() {
                            break;
                        }
                        *skip -= 1;
                    }
                    if *skip == 0 {
                        next = self.source.try_get_next();
                    }
                    if next.is_some() {
                        *remaining -= 1;
                    }
                    next
                }
            }
            Mode::Sliding { skip, window } => {
                let mut next = None;
                while *skip > 0 {
                    if self.source.try_get_next().is_none() {
                        break;
                    }
                    *skip -= 1;
                }
                if *skip == 0 {
                    while let Some(v) = self.source.try_get_next() {
                        if let Some(out) = window.push_back(v) {
                            next = Some(out);
                            break;
                        }
                    }
                }
                next
            }
            Mode::Replay { queue, remaining } => {
                if *remaining == 0 {
                    None
                } else {
                    *remaining -= 1;
                    queue.pop_front()
                }
            }
        };
        if next.is_none() {
            self.finish();
        }
        next
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match &self.mode {
            Mode::Uninitialized => self
                .source
                .try_get_non_enumerated_count()
                .map(|c| self.range.window(c).1),
            Mode::Direct { skip, remaining } => self
                .source
                .try_get_non_enumerated_count()
                .map(|c| c.saturating_sub(*skip).min(*remaining)),
            Mode::Sliding { .. } => None,
            Mode::Replay { remaining, .. } => Some(*remaining),
            Mode::Done => Some(0),
        }
    }

    fn try_get_span(&self) -> Option<&[E::Item]> {
        let span = self.source.try_get_span()?;
        let (skip, take) = match &self.mode {
            Mode::Uninitialized => self.range.window(span.len()),
            Mode::Direct { skip, remaining } => (*skip, *remaining),
            _ => return None,
        };
        let start = skip.min(span.len());
        let end = start + take.min(span.len() - start);
        Some(&span[start..end])
    }

    fn try_copy_to(&mut self, destination: &mut Vec<E::Item>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let (skip, ours) = match &self.mode {
            Mode::Uninitialized => match self.source.try_get_non_enumerated_count() {
                Some(c) => self.range.window(c),
                None => return false,
            },
            Mode::Direct { skip, remaining } => match self.source.try_get_non_enumerated_count() {
                Some(c) => (*skip, c.saturating_sub(*skip).min(*remaining)),
                None => return false,
            },
            Mode::Sliding { .. } => return false,
            Mode::Replay { queue, remaining } => {
                let Some((start, n)) = copy_window(*remaining, offset, count) else {
                    return false;
                };
                destination.extend(queue.iter().skip(start).take(n).cloned());
                return true;
            }
            Mode::Done => return copy_window(0, offset, count).is_some(),
        };
        let Some((start, n)) = copy_window(ours, offset, count) else {
            return false;
        };
        self.source
            .try_copy_to(destination, Index::Start(skip + start), n)
    }

    fn dispose(&mut self) {
        self.finish();
        self.source.dispose();
    }
}
