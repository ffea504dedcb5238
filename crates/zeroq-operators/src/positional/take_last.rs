use zeroq_core::config::QueryConfig;
use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};
use zeroq_mem::{ArrayPool, RingBuffer};

use crate::clamp_count;

enum State<T> {
    Initial,
    PassThrough,
    Replay(RingBuffer<T>),
    Done,
}

/// Yields the last `take_count` elements.
///
/// With a known count the leading elements are discarded and the rest pass
/// through untouched. Otherwise a ring buffer holds the trailing window; it
/// starts small and doubles up to `take_count` before it starts evicting.
pub struct TakeLast<E: ValueEnumerator> {
    source: E,
    take_count: usize,
    state: State<E::Item>,
    pool: ArrayPool,
}

impl<E: ValueEnumerator> TakeLast<E> {
    pub fn new(source: E, count: isize) -> Self {
        Self::new_in(source, count, ArrayPool::shared())
    }

    pub fn new_in(source: E, count: isize, pool: ArrayPool) -> Self {
        Self {
            source,
            take_count: clamp_count(count),
            state: State::Initial,
            pool,
        }
    }

    fn start(&mut self) {
        if self.take_count == 0 {
            self.state = State::Done;
            return;
        }
        if let Some(count) = self.source.try_get_non_enumerated_count() {
            for _ in 0..count.saturating_sub(self.take_count) {
                if self.source.try_get_next().is_none() {
                    break;
                }
            }
            self.state = State::PassThrough;
            return;
        }
        let initial = QueryConfig::global().ring_buffer_initial_capacity;
        let mut ring = RingBuffer::new(self.pool.clone(), initial, Some(self.take_count));
        while let Some(v) = self.source.try_get_next() {
            ring.push_back(v);
        }
        trace_op!(take = self.take_count, held = ring.len(), capacity = ring.capacity(), "take_last: replay");
        self.state = State::Replay(ring);
    }

    fn finish(&mut self) {
        if let State::Replay(ring) = &mut self.state {
            ring.release();
        }
        self.state = State::Done;
    }
}

impl<E: ValueEnumerator> ValueEnumerator for TakeLast<E> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if matches!(self.state, State::Initial) {
            self.start();
        }
        let next = match &mut self.state {
            State::Initial | State::Done => return None,
            State::PassThrough => self.source.try_get_next(),
            State::Replay(ring) => ring.pop_front(),
        };
        if next.is_none() {
            self.finish();
        }
        next
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match &self.state {
            State::Initial => self
                .source
                .try_get_non_enumerated_count()
                .map(|c| c.min(self.take_count)),
            State::PassThrough => self.source.try_get_non_enumerated_count(),
            State::Replay(ring) => Some(ring.len()),
            State::Done => Some(0),
        }
    }

    fn try_get_span(&self) -> Option<&[E::Item]> {
        let span = self.source.try_get_span()?;
        match self.state {
            State::Initial => Some(&span[span.len().saturating_sub(self.take_count)..]),
            State::PassThrough => Some(span),
            _ => None,
        }
    }

    fn try_copy_to(&mut self, destination: &mut Vec<E::Item>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        match &self.state {
            State::Initial => {
                let Some(c) = self.source.try_get_non_enumerated_count() else {
                    return false;
                };
                let ours = c.min(self.take_count);
                let Some((start, n)) = copy_window(ours, offset, count) else {
                    return false;
                };
                self.source
                    .try_copy_to(destination, Index::Start(c - ours + start), n)
            }
            State::PassThrough => self.source.try_copy_to(destination, offset, count),
            State::Replay(ring) => {
                let Some((start, n)) = copy_window(ring.len(), offset, count) else {
                    return false;
                };
                destination.extend(ring.iter().skip(start).take(n).cloned());
                true
            }
            State::Done => copy_window(0, offset, count).is_some(),
        }
    }

    fn dispose(&mut self) {
        self.finish();
        self.source.dispose();
    }
}
