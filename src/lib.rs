#![forbid(unsafe_code)]
//! zeroq: statically composed query operators over slices, ranges and
//! iterators.
//!
//! The workspace is split the same way the runtime is layered:
//! - `zeroq-core`: the enumerator protocol, indices, comparers, config, errors.
//! - `zeroq-mem`: rented buffers (pool accounting, ring buffer, segmented builder).
//! - `zeroq-operators`: sources, operators and the `Query` builder trait.
//!
//! ```
//! use zeroq::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let middle = from_slice(&data).take_range(Index::Start(2)..Index::End(2)).to_vec();
//! assert_eq!(middle, vec![3, 4, 5, 6, 7, 8]);
//! ```

pub use zeroq_core;
pub use zeroq_mem;
pub use zeroq_operators;

pub use zeroq_core::{Error, Index, QueryRange, Result, ValueEnumerator, ValueIter};
pub use zeroq_operators::Query;

pub mod prelude {
    pub use zeroq_core::prelude::*;
    pub use zeroq_mem::{ArrayPool, PoolStats};
    pub use zeroq_operators::source::{
        empty, from_exact_iter, from_iter, from_slice, from_vec, range, repeat, sequence,
    };
    pub use zeroq_operators::{Grouping, Lookup, Query};
}
