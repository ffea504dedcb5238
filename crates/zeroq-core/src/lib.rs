#![forbid(unsafe_code)]
//! zeroq-core: the enumerator protocol and the small capability traits every
//! operator is written against.
//!
//! No buffers, pooling or operators live here; `zeroq-mem` and
//! `zeroq-operators` build on these interfaces.

pub mod comparer;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod index;
pub mod numeric;
pub mod prelude;
pub mod random;

pub use enumerator::{ValueEnumerator, ValueIter};
pub use error::{Error, Result};
pub use index::{Index, QueryRange};
