//! Random permutations and uniform random subsets.
//!
//! `Shuffle` materializes the whole upstream and permutes it. Once a shuffle
//! is followed by `take`/`skip` (or their from-end forms, which have the same
//! distribution) it becomes a `PartialShuffle` that only pays for the `k`
//! elements it will yield:
//!
//! - Strategy A: materialize all `n`, then run only the last `k` steps of a
//!   Fisher–Yates pass and serve those positions.
//! - Strategy B: when `k` is small next to `n`, or `n` is unknown, keep a
//!   reservoir of `k` elements and shuffle it at the end.

mod full;
mod partial;

pub use full::Shuffle;
pub use partial::PartialShuffle;

use zeroq_core::config::QueryConfig;
use zeroq_core::random::RandomIndex;
use zeroq_core::ValueEnumerator;
use zeroq_mem::{ArrayPool, RentedArray};

/// Permute `items` uniformly.
pub(crate) fn shuffle_all<T, R: RandomIndex>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    partial_shuffle_tail(items, n, rng);
}

/// Run the last `k` steps of a Fisher–Yates pass: afterwards `items[n-k..]`
/// is a uniformly random `k`-subset in uniformly random order. Callers serve
/// it with `pop`.
pub(crate) fn partial_shuffle_tail<T, R: RandomIndex>(items: &mut [T], k: usize, rng: &mut R) {
    let n = items.len();
    let stop = n - k.min(n);
    for i in (stop.max(1)..n).rev() {
        let j = rng.next_index_in_range(0, i + 1);
        items.swap(i, j);
    }
}

/// Algorithm R over the whole upstream, keeping `k` elements, then a full
/// shuffle of the reservoir. Returns the reservoir and how many elements the
/// upstream produced.
pub(crate) fn reservoir_sample<E, R>(
    source: &mut E,
    k: usize,
    rng: &mut R,
    pool: &ArrayPool,
) -> (RentedArray<E::Item>, usize)
where
    E: ValueEnumerator,
    R: RandomIndex,
{
    // `k` may exceed the upstream; grow on push instead of reserving it all.
    let initial = k.min(QueryConfig::global().segment_initial_capacity);
    let mut reservoir = pool.rent(initial, "shuffle_reservoir");
    let mut seen = 0usize;
    while let Some(v) = source.try_get_next() {
        if seen < k {
            reservoir.push(v);
        } else {
            let j = rng.next_index_in_range(0, seen + 1);
            if j < k {
                reservoir.replace(j, v);
            }
        }
        seen += 1;
    }
    shuffle_all(&mut reservoir, rng);
    (reservoir, seen)
}

/// Pull every remaining element into a rented buffer.
pub(crate) fn drain_rented<E: ValueEnumerator>(
    source: &mut E,
    pool: &ArrayPool,
) -> RentedArray<E::Item> {
    let capacity = source
        .try_get_non_enumerated_count()
        .unwrap_or(QueryConfig::global().segment_initial_capacity);
    let mut buf = pool.rent(capacity, "shuffle_buffer");
    while let Some(v) = source.try_get_next() {
        buf.push(v);
    }
    buf
}
