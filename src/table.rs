//! The painters × boards table filled by the tabulated solver.
//!
//! Cells start explicitly unset; only `1 <= j <= K`, `1 <= i <= N` are ever
//! written.

use crate::utils::PartitionValue;

/// `(K+1) × (N+1)` grid indexed by `(painters, boards)`.
///
/// Entry `(j, i)` holds the optimal maximum segment sum for the first `i`
/// boards split among `j` painters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    painters: usize,
    boards: usize,
    cells: Vec<Option<PartitionValue>>,
}

impl DpTable {
    /// Allocate a table for up to `painters` painters and `boards` boards,
    /// every cell unset.
    pub fn new(painters: usize, boards: usize) -> Self {
        Self {
            painters,
            boards,
            cells: vec![None; (painters + 1) * (boards + 1)],
        }
    }

    /// Largest painter index `K`.
    pub fn painters(&self) -> usize {
        self.painters
    }

    /// Largest board index `N`.
    pub fn boards(&self) -> usize {
        self.boards
    }

    #[inline]
    fn offset(&self, j: usize, i: usize) -> usize {
        assert!(
            j <= self.painters && i <= self.boards,
            "cell ({j}, {i}) outside {}x{} table",
            self.painters + 1,
            self.boards + 1
        );
        j * (self.boards + 1) + i
    }

    /// Value at `(j, i)`, or `None` if never written.
    #[inline]
    pub fn get(&self, j: usize, i: usize) -> Option<PartitionValue> {
        self.cells[self.offset(j, i)]
    }

    /// Write `(j, i)`.
    #[inline]
    pub fn set(&mut self, j: usize, i: usize, value: PartitionValue) {
        let idx = self.offset(j, i);
        self.cells[idx] = Some(value);
    }

    /// Value at `(j, i)`.
    ///
    /// # Panics
    /// Panics if the cell was never written, which means a read preceded
    /// its write.
    #[inline]
    pub fn value(&self, j: usize, i: usize) -> PartitionValue {
        match self.get(j, i) {
            Some(v) => v,
            None => panic!("table cell ({j}, {i}) read before it was written"),
        }
    }

    /// Row `j`, boards `0..=N`.
    pub fn row(&self, j: usize) -> &[Option<PartitionValue>] {
        let start = self.offset(j, 0);
        &self.cells[start..start + self.boards + 1]
    }
}
