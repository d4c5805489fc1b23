//! Bottom-up painter's partition.
//!
//! [`dynamic_partition_table`] fills a `(min(K, N)+1) × (N+1)` [`DpTable`]:
//! row `j = 1` is the running prefix sum, column `i = 1` is `boards[0]`, and
//! every other filled cell is
//!
//! ```text
//! table[j][i] = min over l in 1..=i of max(table[j-1][l], sum(boards[l..i)))
//! ```
//!
//! Rows come from [`PaintersProblem`] driven by [`LayeredEngine`], one
//! layer per painter. [`rolling_partition`] runs the same layers but keeps
//! only the live row.

use crate::engine::LayeredEngine;
use crate::error::PartitionError;
use crate::problems::painters::PaintersProblem;
use crate::table::DpTable;
use crate::utils::PartitionValue;

/// Tabulated variant of [`partition`](crate::partition): O(K·N²) time,
/// O(K·N) memory.
///
/// ```
/// assert_eq!(partition_dp::dynamic_partition(&[10, 20, 60, 50, 30, 40], 6, 3), Ok(90));
/// ```
pub fn dynamic_partition(
    boards: &[i64],
    n: usize,
    k: usize,
) -> Result<PartitionValue, PartitionError> {
    let table = dynamic_partition_table(boards, n, k)?;
    Ok(table.value(table.painters(), n))
}

/// Fill and return the table for `(boards, n, k)`.
///
/// Rows stop changing once there are as many painters as boards, so the
/// table holds `min(k, n)` painter rows: `table.painters() == k.min(n)`.
/// Row 0 and column 0 stay unset.
pub fn dynamic_partition_table(
    boards: &[i64],
    n: usize,
    k: usize,
) -> Result<DpTable, PartitionError> {
    let problem = PaintersProblem::try_new(boards, n, k)?.saturated();
    let painters = problem.painters();
    let engine = LayeredEngine::new(problem);
    let (cost, frontiers) = engine.run_with_frontiers();

    let mut table = DpTable::new(painters, n);
    for (layer, row) in frontiers.iter().enumerate() {
        let j = PaintersProblem::painters_at_layer(layer);
        for i in 1..=n {
            table.set(j, i, row.at(i));
        }
    }
    debug_assert_eq!(table.get(painters, n), Some(cost));
    Ok(table)
}

/// Tabulated variant keeping a single row: O(K·N²) time, O(N) memory.
///
/// Painters beyond `n` are dropped first since they cannot lower the value.
pub fn rolling_partition(
    boards: &[i64],
    n: usize,
    k: usize,
) -> Result<PartitionValue, PartitionError> {
    let problem = PaintersProblem::try_new(boards, n, k)?.saturated();
    Ok(LayeredEngine::new(problem).run())
}
