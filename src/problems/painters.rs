//! Painter's partition as a layered DP.
//!
//! We treat layers as painter counts: the frontier at layer `L` is the table
//! row for `j = L + 1` painters, holding the optimal maximum segment sum for
//! every board prefix `1..=n`.
//!
//! Row `j = 1` is the running prefix sum. Row `j` follows from row `j - 1`:
//!
//! ```text
//! row_j[1] = boards[0]
//! row_j[i] = min over l in 1..=i of max(row_{j-1}[l], sum(boards[l..i)))
//! ```
//!
//! Every row only reads its predecessor, so filling painter-major never
//! reads a cell before it is written.

use crate::error::{validate, PartitionError};
use crate::traits::LayeredProblem;
use crate::utils::{PartitionValue, PrefixSums};

#[derive(Clone, Debug)]
pub struct PaintersProblem {
    sums: PrefixSums,
    first_board: PartitionValue,
    painters: usize,
}

/// One table row: `best[i - 1]` is the value for the first `i` boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintersFrontier {
    pub best: Vec<PartitionValue>,
}

impl PaintersFrontier {
    /// Value for the first `i` boards, `1 <= i <= n`.
    #[inline]
    pub fn at(&self, i: usize) -> PartitionValue {
        self.best[i - 1]
    }
}

impl PaintersProblem {
    /// Instance over every board in `boards`.
    ///
    /// # Panics
    /// Panics on input that [`PaintersProblem::try_new`] would reject.
    pub fn new(boards: &[i64], painters: usize) -> Self {
        match Self::try_new(boards, boards.len(), painters) {
            Ok(problem) => problem,
            Err(err) => panic!("invalid painters instance: {err}"),
        }
    }

    /// Instance over the first `n` boards with `painters` painters.
    pub fn try_new(boards: &[i64], n: usize, painters: usize) -> Result<Self, PartitionError> {
        validate(boards, n, painters)?;
        Ok(Self {
            sums: PrefixSums::new(boards, n),
            first_board: boards[0] as PartitionValue,
            painters,
        })
    }

    /// Number of boards `n`.
    pub fn n(&self) -> usize {
        self.sums.len()
    }

    /// Painter count `k`.
    pub fn painters(&self) -> usize {
        self.painters
    }

    /// Painter count represented by the frontier at `layer`.
    #[inline]
    pub fn painters_at_layer(layer: usize) -> usize {
        layer + 1
    }

    /// Same instance with `painters` capped at `n`.
    ///
    /// Rows stop changing once there are at least as many painters as
    /// boards, so the capped instance has the same cost.
    pub fn saturated(mut self) -> Self {
        self.painters = self.painters.min(self.n());
        self
    }
}

impl LayeredProblem for PaintersProblem {
    type Frontier = PaintersFrontier;
    type Cost = PartitionValue;

    fn num_layers(&self) -> usize {
        self.painters - 1
    }

    fn init_frontier(&self) -> Self::Frontier {
        // j = 1: one painter paints the whole prefix
        PaintersFrontier {
            best: (1..=self.n()).map(|i| self.sums.prefix(i)).collect(),
        }
    }

    fn forward_step(&self, _layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        let n = self.n();
        let mut best = Vec::with_capacity(n);
        best.push(self.first_board);

        for i in 2..=n {
            let mut cell = PartitionValue::MAX;
            for l in 1..=i {
                let candidate = frontier_i.at(l).max(self.sums.range_sum(l, i));
                cell = cell.min(candidate);
            }
            best.push(cell);
        }

        PaintersFrontier { best }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.at(self.n())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayeredEngine;

    #[test]
    fn first_row_is_running_sum() {
        let problem = PaintersProblem::new(&[10, 20, 30, 40], 2);
        assert_eq!(problem.init_frontier().best, vec![10, 30, 60, 100]);
    }

    #[test]
    fn second_row_splits_once() {
        let problem = PaintersProblem::new(&[10, 20, 30, 40], 2);
        let row2 = problem.forward_step(0, &problem.init_frontier());
        assert_eq!(row2.best, vec![10, 20, 30, 60]);
    }

    #[test]
    fn engine_solves_sample() {
        let problem = PaintersProblem::new(&[10, 20, 60, 50, 30, 40], 3);
        assert_eq!(problem.num_layers(), 2);
        assert_eq!(LayeredEngine::new(problem).run(), 90);
    }

    #[test]
    fn saturated_caps_painters_and_keeps_cost() {
        let boards = [4, 9, 2];
        let full = PaintersProblem::new(&boards, 10);
        let capped = full.clone().saturated();
        assert_eq!(capped.painters(), 3);
        assert_eq!(
            LayeredEngine::new(full).run(),
            LayeredEngine::new(capped).run()
        );
    }

    #[test]
    fn try_new_honours_prefix_length() {
        let problem = PaintersProblem::try_new(&[10, 20, 30, 40], 2, 1).unwrap();
        assert_eq!(problem.n(), 2);
        assert_eq!(LayeredEngine::new(problem).run(), 30);
    }

    #[test]
    fn try_new_rejects_bad_input() {
        assert_eq!(
            PaintersProblem::try_new(&[1, 2], 2, 0).unwrap_err(),
            PartitionError::InvalidPainterCount { k: 0 }
        );
    }

    #[test]
    #[should_panic(expected = "invalid painters instance")]
    fn new_panics_on_empty_boards() {
        PaintersProblem::new(&[], 1);
    }
}
