//! Painter's partition solvers.
//!
//! Given board lengths `boards[0..n)` and `k` painters, each painting one
//! contiguous run of boards at unit speed and all working in parallel, find
//! the minimum possible finishing time: the smallest achievable value of the
//! largest run sum over all splits into at most `k` contiguous non-empty runs.
//!
//! ## Strategies
//! - [`partition`]: direct recursion over the last split point. Exponential
//!   in `n`; useful as the reference semantics.
//! - [`memoized_partition`]: the same recursion with a memo.
//! - [`dynamic_partition`]: bottom-up fill of a `(min(K, N)+1) × (N+1)` [`DpTable`],
//!   O(K·N²) time via prefix sums.
//! - [`rolling_partition`]: the same fill keeping one row, O(N) memory.
//!
//! All of them return identical values for identical valid input and report
//! invalid input as a [`PartitionError`] before doing any work.
//!
//! ## Quick start
//! ```
//! use partition_dp::{dynamic_partition, partition, PartitionError};
//!
//! let boards = [10, 20, 30, 40];
//! assert_eq!(partition(&boards, 4, 2), Ok(60));
//! assert_eq!(dynamic_partition(&boards, 4, 2), Ok(60));
//! assert_eq!(
//!     dynamic_partition(&boards, 4, 0),
//!     Err(PartitionError::InvalidPainterCount { k: 0 })
//! );
//! ```
//!
//! The tabulated solvers are built on a small layered-DP framework
//! ([`LayeredProblem`] + [`LayeredEngine`]) with one layer per painter.

pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod solvers;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{PartitionSolver, PartitionSolverBuilder, Strategy};
pub use crate::engine::LayeredEngine;
pub use crate::error::PartitionError;
pub use crate::solvers::memoized::memoized_partition;
pub use crate::solvers::recursive::partition;
pub use crate::solvers::tabulated::{dynamic_partition, dynamic_partition_table, rolling_partition};
pub use crate::table::DpTable;
pub use crate::traits::LayeredProblem;
pub use crate::utils::{PartitionValue, PrefixSums};
