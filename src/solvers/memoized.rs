//! Top-down painter's partition with a `(prefix length, painters)` memo.
//!
//! Same recurrence as [`recursive`](super::recursive); each subproblem is
//! solved once, giving O(K·N²) time and O(K·N) memo entries.

use std::collections::HashMap;

use crate::error::{validate, PartitionError};
use crate::utils::{PartitionValue, PrefixSums};

/// Memoized variant of [`partition`](crate::partition).
pub fn memoized_partition(
    boards: &[i64],
    n: usize,
    k: usize,
) -> Result<PartitionValue, PartitionError> {
    validate(boards, n, k)?;
    let mut memo = Memo {
        sums: PrefixSums::new(boards, n),
        cache: HashMap::new(),
    };
    Ok(memo.solve(n, k.min(n)))
}

struct Memo {
    sums: PrefixSums,
    cache: HashMap<(usize, usize), PartitionValue>,
}

impl Memo {
    fn solve(&mut self, n: usize, k: usize) -> PartitionValue {
        if k == 1 {
            return self.sums.prefix(n);
        }
        if n == 1 {
            return self.sums.prefix(1);
        }
        if let Some(&hit) = self.cache.get(&(n, k)) {
            return hit;
        }

        let mut best = PartitionValue::MAX;
        for i in 1..=n {
            let right = self.sums.range_sum(i, n);
            let left = self.solve(i, k - 1);
            best = best.min(left.max(right));
        }
        self.cache.insert((n, k), best);
        best
    }
}
