//! Randomness for shuffles.
//!
//! Operators only need `next_index_in_range`. Any `rand::RngCore` provides it;
//! `SharedRng` is the process-wide default.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::QueryConfig;

pub trait RandomIndex {
    /// Uniform index in `low..high`. Callers guarantee `low < high`.
    fn next_index_in_range(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RngCore> RandomIndex for R {
    #[inline]
    fn next_index_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

static SHARED: Lazy<Mutex<ChaCha8Rng>> = Lazy::new(|| {
    let rng = match QueryConfig::global().seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(seeded = QueryConfig::global().seed.is_some(), "shared rng initialized");
    Mutex::new(rng)
});

/// Handle to the process-wide generator. Each draw takes the lock briefly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRng;

impl SharedRng {
    fn with<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        // A poisoned lock still holds a valid generator state.
        let mut guard = match SHARED.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl RngCore for SharedRng {
    fn next_u32(&mut self) -> u32 {
        Self::with(|r| r.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        Self::with(|r| r.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Self::with(|r| r.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Self::with(|r| r.try_fill_bytes(dest))
    }
}
