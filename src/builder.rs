use std::fmt;
use std::str::FromStr;

use crate::error::PartitionError;
use crate::solvers::{memoized, recursive, tabulated};
use crate::utils::PartitionValue;

/// Which evaluation strategy a [`PartitionSolver`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Unmemoized recursion; exponential in `n`.
    Recursive,
    /// Recursion over a `(prefix, painters)` memo.
    Memoized,
    /// Full table fill.
    #[default]
    Tabulated,
    /// Table fill keeping a single row.
    Rolling,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::Memoized,
        Strategy::Tabulated,
        Strategy::Rolling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
            Strategy::Rolling => "rolling",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| format!("unknown strategy '{value}'"))
    }
}

/// A configured solver; build one with [`PartitionSolverBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSolver {
    strategy: Strategy,
}

impl PartitionSolver {
    pub fn builder() -> PartitionSolverBuilder {
        PartitionSolverBuilder::new()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Solve `(boards, n, k)` with the configured strategy.
    pub fn solve(
        &self,
        boards: &[i64],
        n: usize,
        k: usize,
    ) -> Result<PartitionValue, PartitionError> {
        match self.strategy {
            Strategy::Recursive => recursive::partition(boards, n, k),
            Strategy::Memoized => memoized::memoized_partition(boards, n, k),
            Strategy::Tabulated => tabulated::dynamic_partition(boards, n, k),
            Strategy::Rolling => tabulated::rolling_partition(boards, n, k),
        }
    }
}

impl Default for PartitionSolver {
    fn default() -> Self {
        PartitionSolverBuilder::new().build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartitionSolverBuilder {
    strategy: Option<Strategy>,
}

impl PartitionSolverBuilder {
    pub fn new() -> Self {
        Self { strategy: None }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> PartitionSolver {
        PartitionSolver {
            strategy: self.strategy.unwrap_or_default(),
        }
    }
}
