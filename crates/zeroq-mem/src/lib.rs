#![forbid(unsafe_code)]
//! zeroq-mem: rental-accounted buffers shared by the operators.
//!
//! Any buffer an operator keeps between pulls (shuffle storage, take-last
//! queues, collection segments) is rented from an `ArrayPool` and returned
//! through an RAII guard, so every exit path (including unwinding out of a
//! user callback) gives the rental back exactly once.

pub mod pool;
pub mod rented;
pub mod ring;
pub mod segmented;

pub use pool::{ArrayPool, PoolStats, RentGuard};
pub use rented::RentedArray;
pub use ring::RingBuffer;
pub use segmented::SegmentedArrayBuilder;
