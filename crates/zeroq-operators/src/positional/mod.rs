//! Positional operators: skip, take, ranges and trailing windows.
//!
//! Chains of the same kind merge arithmetically through inherent methods
//! that shadow the `Query` builders, so `skip(a).skip(b).take(c)` is a single
//! `SkipTake` stage.

mod skip;
mod skip_take;
mod take;
mod take_last;
mod take_range;

pub use skip::Skip;
pub use skip_take::SkipTake;
pub use take::Take;
pub use take_last::TakeLast;
pub use take_range::TakeRange;
