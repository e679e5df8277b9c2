//! Sequential and multi-threaded folds over slices.
//!
//! The crate provides two ways to reduce a slice to a single value with `+=`:
//!
//! - [`sequential_fold`]: a plain left-fold, the baseline.
//! - [`parallel_fold`]: splits the input into contiguous blocks sized from
//!   the machine's hardware concurrency, sums each block on its own thread
//!   into a dedicated slot, then folds the partial sums with the same
//!   sequential fold.
//!
//! The partitioning is static (one block per worker, computed up front) —
//! there is no work stealing and no shared mutable state between workers, so
//! the only synchronization is the join at the end of the thread scope.
//!
//! The `compare_folds` binary times both approaches over the same input and
//! prints a verdict.

pub mod error;
pub mod fold;
pub mod parallel;
pub mod partition;
pub mod timer;

pub use error::FoldError;
pub use fold::sequential_fold;
pub use parallel::{parallel_fold, parallel_fold_with_hint};
pub use partition::PartitionPlan;
pub use timer::Stopwatch;
