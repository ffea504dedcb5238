#![forbid(unsafe_code)]
//! zeroq-operators: statically composed query operators.
//!
//! Design intent:
//! - Every operator is a value owning its upstream; a query is one nested type.
//! - Fast paths (span, non-enumerated count, copy-to) are answered exactly or
//!   declined, never approximated.
//! - Buffers kept across pulls are rented from `zeroq-mem` and returned on
//!   dispose/drop.

/// Trace hook; expands to nothing unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_op {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_op {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_op {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_op {
    ($($arg:tt)*) => {};
}

pub mod chunk;
pub mod concat;
pub mod filter;
pub mod grouping;
pub mod map;
pub mod positional;
pub mod query;
pub mod shuffle;
pub mod source;

pub use chunk::Chunk;
pub use concat::Concat;
pub use filter::{Filter, FilterMap};
pub use grouping::{Distinct, GroupBy, Grouping, Lookup};
pub use map::Map;
pub use positional::{Skip, SkipTake, Take, TakeLast, TakeRange};
pub use query::Query;
pub use shuffle::{PartialShuffle, Shuffle};
pub use source::{
    empty, from_exact_iter, from_iter, from_slice, from_vec, range, repeat, sequence,
};

/// Negative requested counts clamp to zero.
#[inline]
pub(crate) fn clamp_count(count: isize) -> usize {
    count.max(0) as usize
}
