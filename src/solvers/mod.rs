//! Solver entry points.
//!
//! Every function here takes `(boards, n, k)`, validates it, and returns the
//! minimum over all splits of the first `n` boards into at most `k`
//! contiguous runs of the largest run sum. They differ only in cost:
//! - [`recursive`] : plain top-down recurrence, exponential in `n`.
//! - [`memoized`]  : the same recurrence with a `(prefix, painters)` memo.
//! - [`tabulated`] : bottom-up table fill, O(K·N²) time, plus a rolling-row
//!   variant in O(N) memory.

pub mod memoized;
pub mod recursive;
pub mod tabulated;
