//! Top-down painter's partition without memoization.
//!
//! For `k` painters and the first `n` boards:
//! - one painter paints everything: `sum(boards[0..n))`,
//! - a single board is its own length,
//! - otherwise the last painter takes `boards[i..n)` for some split `i` in
//!   `1..=n` and the first `i` boards are solved with `k - 1` painters; the
//!   answer is the split minimizing the slower side.
//!
//! Identical subproblems are re-solved on every path that reaches them, so
//! the running time grows exponentially with `n`.

use crate::error::{validate, PartitionError};
use crate::utils::{PartitionValue, PrefixSums};

/// Minimum achievable largest segment sum for the first `n` boards split
/// among `k` painters, by direct recursion.
///
/// ```
/// assert_eq!(partition_dp::partition(&[10, 20, 30, 40], 4, 2), Ok(60));
/// ```
pub fn partition(boards: &[i64], n: usize, k: usize) -> Result<PartitionValue, PartitionError> {
    validate(boards, n, k)?;
    let sums = PrefixSums::new(boards, n);
    // painters beyond n cannot lower the value; capping bounds the depth
    Ok(solve(&sums, n, k.min(n)))
}

fn solve(sums: &PrefixSums, n: usize, k: usize) -> PartitionValue {
    if k == 1 {
        return sums.prefix(n);
    }
    if n == 1 {
        return sums.prefix(1);
    }

    let mut best = PartitionValue::MAX;
    for i in 1..=n {
        let right = sums.range_sum(i, n);
        let left = solve(sums, i, k - 1);
        best = best.min(left.max(right));
    }
    best
}
