//! Convenient re-exports for downstream crates.

pub use crate::comparer::{DefaultComparer, KeyComparer, OptionComparer, ProjectionComparer};
pub use crate::config::QueryConfig;
pub use crate::enumerator::{ValueEnumerator, ValueIter};
pub use crate::error::{Error, Result};
pub use crate::index::{Index, QueryRange};
pub use crate::numeric::Numeric;
pub use crate::random::{RandomIndex, SharedRng};
