use zeroq_core::config::QueryConfig;
use zeroq_core::random::RandomIndex;
use zeroq_core::ValueEnumerator;
use zeroq_mem::{ArrayPool, RentedArray};

use crate::clamp_count;
use crate::shuffle::{drain_rented, partial_shuffle_tail, reservoir_sample};

enum State<T> {
    Pending,
    /// Served from the end of `buf` by `pop`.
    Ready {
        buf: RentedArray<T>,
        remaining: usize,
    },
    Done,
}

/// `shuffle()` followed by `skip`/`take`: a uniformly random ordered subset of
/// `min(take, n - skip)` elements.
pub struct PartialShuffle<E: ValueEnumerator, R> {
    source: E,
    rng: R,
    pool: ArrayPool,
    skip: usize,
    take: Option<usize>,
    state: State<E::Item>,
}

impl<E: ValueEnumerator, R: RandomIndex> PartialShuffle<E, R> {
    pub(crate) fn from_parts(
        source: E,
        rng: R,
        pool: ArrayPool,
        skip: usize,
        take: Option<usize>,
    ) -> Self {
        Self {
            source,
            rng,
            pool,
            skip,
            take,
            state: State::Pending,
        }
    }

    pub(crate) fn from_buffer(
        source: E,
        rng: R,
        pool: ArrayPool,
        buf: RentedArray<E::Item>,
        remaining: usize,
    ) -> Self {
        Self {
            source,
            rng,
            pool,
            skip: 0,
            take: None,
            state: State::Ready { buf, remaining },
        }
    }

    pub(crate) fn exhausted(source: E, rng: R, pool: ArrayPool) -> Self {
        Self {
            source,
            rng,
            pool,
            skip: 0,
            take: None,
            state: State::Done,
        }
    }

    /// Narrow the number of elements yielded.
    pub fn take(mut self, count: isize) -> Self {
        let count = clamp_count(count);
        match &mut self.state {
            State::Pending => {
                self.take = Some(self.take.map_or(count, |t| t.min(count)));
            }
            State::Ready { remaining, .. } => *remaining = (*remaining).min(count),
            State::Done => {}
        }
        self
    }

    pub fn skip(mut self, count: isize) -> Self {
        let count = clamp_count(count);
        match &mut self.state {
            State::Pending => {
                self.skip = self.skip.saturating_add(count);
                self.take = self.take.map(|t| t.saturating_sub(count));
            }
            State::Ready { remaining, .. } => *remaining = remaining.saturating_sub(count),
            State::Done => {}
        }
        self
    }

    pub fn take_last(self, count: isize) -> Self {
        self.take(count)
    }

    pub fn skip_last(self, count: isize) -> Self {
        self.skip(count)
    }

    fn sample_size(&self, n: usize) -> usize {
        let available = n.saturating_sub(self.skip);
        match self.take {
            Some(t) => t.min(available),
            None => available,
        }
    }

    fn materialize(&mut self) {
        let ratio = QueryConfig::global().shuffle_reservoir_ratio;
        self.state = match (self.source.try_get_non_enumerated_count(), self.take) {
            (Some(n), _) if self.sample_size(n) == 0 => State::Done,
            (_, Some(0)) => State::Done,
            (Some(n), Some(_)) if self.sample_size(n).saturating_mul(ratio) <= n => {
                let k = self.sample_size(n);
                trace_op!(n, k, "shuffle: reservoir");
                let (buf, _) = reservoir_sample(&mut self.source, k, &mut self.rng, &self.pool);
                State::Ready { buf, remaining: k }
            }
            (None, Some(t)) => {
                trace_op!(k = t, "shuffle: reservoir over unknown count");
                let (buf, seen) = reservoir_sample(&mut self.source, t, &mut self.rng, &self.pool);
                let remaining = self.sample_size(seen);
                State::Ready { buf, remaining }
            }
            _ => {
                let mut buf = drain_rented(&mut self.source, &self.pool);
                let k = self.sample_size(buf.len());
                trace_op!(n = buf.len(), k, "shuffle: partial Fisher-Yates");
                partial_shuffle_tail(&mut buf, k, &mut self.rng);
                State::Ready { buf, remaining: k }
            }
        };
    }

    fn finish(&mut self) {
        if let State::Ready { buf, .. } = &mut self.state {
            buf.release();
        }
        self.state = State::Done;
    }
}

impl<E: ValueEnumerator, R: RandomIndex> ValueEnumerator for PartialShuffle<E, R> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if matches!(self.state, State::Pending) {
            self.materialize();
        }
        let next = match &mut self.state {
            State::Ready { buf, remaining } if *remaining > 0 => {
                *remaining -= 1;
                buf.pop()
            }
            _ => None,
        };
        if next.is_none() {
            self.finish();
        }
        next
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match &self.state {
            State::Pending => self
                .source
                .try_get_non_enumerated_count()
                .map(|n| self.sample_size(n)),
            State::Ready { remaining, .. } => Some(*remaining),
            State::Done => Some(0),
        }
    }

    fn dispose(&mut self) {
        self.finish();
        self.source.dispose();
    }
}
