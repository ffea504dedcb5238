use zeroq_core::random::{RandomIndex, SharedRng};
use zeroq_core::ValueEnumerator;
use zeroq_mem::{ArrayPool, RentedArray};

use crate::clamp_count;
use crate::shuffle::{drain_rented, shuffle_all, PartialShuffle};

enum State<T> {
    Pending,
    Ready(RentedArray<T>),
    Done,
}

/// Uniform random permutation of the whole upstream.
///
/// The count passes through; there is no span and no copy because the order
/// only exists once the buffer has been shuffled.
pub struct Shuffle<E: ValueEnumerator, R = SharedRng> {
    source: E,
    rng: R,
    pool: ArrayPool,
    state: State<E::Item>,
}

impl<E: ValueEnumerator> Shuffle<E, SharedRng> {
    pub fn new(source: E) -> Self {
        Self::with_rng(source, SharedRng)
    }
}

impl<E: ValueEnumerator, R: RandomIndex> Shuffle<E, R> {
    pub fn with_rng(source: E, rng: R) -> Self {
        Self::with_rng_in(source, rng, ArrayPool::shared())
    }

    pub fn with_rng_in(source: E, rng: R, pool: ArrayPool) -> Self {
        Self {
            source,
            rng,
            pool,
            state: State::Pending,
        }
    }

    fn into_partial(self, skip: usize, take: Option<usize>) -> PartialShuffle<E, R> {
        match self.state {
            State::Pending => PartialShuffle::from_parts(self.source, self.rng, self.pool, skip, take),
            State::Ready(buf) => {
                let mut remaining = buf.len().saturating_sub(skip);
                if let Some(t) = take {
                    remaining = remaining.min(t);
                }
                PartialShuffle::from_buffer(self.source, self.rng, self.pool, buf, remaining)
            }
            State::Done => PartialShuffle::exhausted(self.source, self.rng, self.pool),
        }
    }

    /// `shuffle().take(k)`: a uniformly random ordered `k`-subset.
    pub fn take(self, count: isize) -> PartialShuffle<E, R> {
        self.into_partial(0, Some(clamp_count(count)))
    }

    pub fn skip(self, count: isize) -> PartialShuffle<E, R> {
        self.into_partial(clamp_count(count), None)
    }

    /// Same distribution as `take`.
    pub fn take_last(self, count: isize) -> PartialShuffle<E, R> {
        self.take(count)
    }

    /// Same distribution as `skip`.
    pub fn skip_last(self, count: isize) -> PartialShuffle<E, R> {
        self.skip(count)
    }
}

impl<E: ValueEnumerator, R: RandomIndex> ValueEnumerator for Shuffle<E, R> {
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        if matches!(self.state, State::Pending) {
            let mut buf = drain_rented(&mut self.source, &self.pool);
            trace_op!(n = buf.len(), "shuffle: full permutation");
            shuffle_all(&mut buf, &mut self.rng);
            self.state = State::Ready(buf);
        }
        let next = match &mut self.state {
            State::Ready(buf) => buf.pop(),
            _ => None,
        };
        if next.is_none() {
            self.dispose_buffer();
        }
        next
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match &self.state {
            State::Pending => self.source.try_get_non_enumerated_count(),
            State::Ready(buf) => Some(buf.len()),
            State::Done => Some(0),
        }
    }

    fn dispose(&mut self) {
        self.dispose_buffer();
        self.source.dispose();
    }
}

impl<E: ValueEnumerator, R> Shuffle<E, R> {
    fn dispose_buffer(&mut self) {
        if let State::Ready(buf) = &mut self.state {
            buf.release();
        }
        self.state = State::Done;
    }
}
