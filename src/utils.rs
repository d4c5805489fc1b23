//! Assorted utilities and helpers.

/// Integer type for segment sums and partition values.
///
/// Boards are `i64` values below `2^63` and a slice holds at most `2^64`
/// of them, so no segment sum can reach `2^127`.
pub type PartitionValue = u128;

/// Prefix sums over a board sequence: `prefix[i] = boards[0] + .. + boards[i-1]`.
///
/// Range sums are then O(1), which keeps the tabulated fill at O(K·N²).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    prefix: Vec<PartitionValue>,
}

impl PrefixSums {
    /// Build prefix sums over the first `n` boards.
    ///
    /// Boards must already be validated as positive.
    pub fn new(boards: &[i64], n: usize) -> Self {
        let mut prefix = Vec::with_capacity(n + 1);
        let mut acc: PartitionValue = 0;
        prefix.push(acc);
        for &b in &boards[..n] {
            debug_assert!(b > 0, "boards must be validated before summing");
            acc += b as PartitionValue;
            prefix.push(acc);
        }
        Self { prefix }
    }

    /// Number of boards covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `boards[0] + .. + boards[i-1]`.
    #[inline]
    pub fn prefix(&self, i: usize) -> PartitionValue {
        self.prefix[i]
    }

    /// Sum of `boards[l..r)`; zero when `l == r`.
    #[inline]
    pub fn range_sum(&self, l: usize, r: usize) -> PartitionValue {
        debug_assert!(l <= r && r <= self.len());
        self.prefix[r] - self.prefix[l]
    }

    /// Sum of every covered board.
    #[inline]
    pub fn total(&self) -> PartitionValue {
        self.prefix[self.len()]
    }
}
