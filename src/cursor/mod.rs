//! Resumable, pooled in-order cursors over B-trees.
//!
//! # Components
//! - [`TreeIter`] - The explicit-stack in-order iterator
//! - [`IterPool`] - Concurrency-safe free list of iterator path stacks
//! - [`Bounded`] - std [`Iterator`] adapter over a `TreeIter`
//! - [`PoolStats`] - Pool statistics

mod bounded;
mod frame;
mod pool;
mod stats;
mod tree_iter;

pub use bounded::Bounded;
pub use pool::{acquire, IterPool};
pub use stats::{PoolStats, PoolStatsSnapshot};
pub use tree_iter::TreeIter;
