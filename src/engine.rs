//! Generic driver for layered dynamic programs.
//!
//! The engine runs the forward pass of a [`LayeredProblem`] in one of two
//! modes:
//! 1. [`LayeredEngine::run`] keeps only the live frontier, so memory stays
//!    at O(W) for frontier width W.
//! 2. [`LayeredEngine::run_with_frontiers`] retains every frontier, giving
//!    the full table of layer values at O(T·W) memory.
//!
//! Both modes apply the same steps in the same order and return the same
//! cost.

use crate::traits::LayeredProblem;

/// Layered DP engine for a given problem instance `P`.
///
/// ```
/// use partition_dp::{problems::painters::PaintersProblem, LayeredEngine};
///
/// let problem = PaintersProblem::new(&[10, 20, 30, 40], 2);
/// let cost = LayeredEngine::new(problem).run();
/// assert_eq!(cost, 60);
/// ```
pub struct LayeredEngine<P: LayeredProblem> {
    problem: P,
}

impl<P: LayeredProblem> LayeredEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consume the engine and hand back the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Run every layer, keeping only the current frontier.
    pub fn run(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("layered_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        for layer in 0..self.problem.num_layers() {
            frontier = self.step(layer, &frontier);
        }
        self.problem.extract_cost(&frontier)
    }

    /// Run every layer and return the cost together with the frontiers of
    /// layers `0..=T`.
    pub fn run_with_frontiers(&self) -> (P::Cost, Vec<P::Frontier>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "layered_run_with_frontiers",
            layers = self.problem.num_layers()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let mut frontiers = Vec::with_capacity(t + 1);
        frontiers.push(self.problem.init_frontier());
        for layer in 0..t {
            let next = self.step(layer, &frontiers[layer]);
            frontiers.push(next);
        }
        let cost = self.problem.extract_cost(&frontiers[t]);
        (cost, frontiers)
    }

    #[inline]
    fn step(&self, layer: usize, frontier: &P::Frontier) -> P::Frontier {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("forward_step", layer);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        self.problem.forward_step(layer, frontier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts layers: frontier i holds `[i, 2i]`, cost is the sum.
    struct Counter {
        layers: usize,
        steps_taken: Cell<usize>,
    }

    impl LayeredProblem for Counter {
        type Frontier = Vec<u64>;
        type Cost = u64;

        fn num_layers(&self) -> usize {
            self.layers
        }
        fn init_frontier(&self) -> Self::Frontier {
            vec![0, 0]
        }
        fn forward_step(&self, layer: usize, f: &Self::Frontier) -> Self::Frontier {
            assert_eq!(f[0], layer as u64, "steps applied out of order");
            self.steps_taken.set(self.steps_taken.get() + 1);
            vec![f[0] + 1, f[1] + 2]
        }
        fn extract_cost(&self, f: &Self::Frontier) -> Self::Cost {
            f.iter().sum()
        }
    }

    fn counter(layers: usize) -> Counter {
        Counter {
            layers,
            steps_taken: Cell::new(0),
        }
    }

    #[test]
    fn zero_layers_returns_initial_cost() {
        let engine = LayeredEngine::new(counter(0));
        assert_eq!(engine.run(), 0);
        let (cost, frontiers) = engine.run_with_frontiers();
        assert_eq!(cost, 0);
        assert_eq!(frontiers, vec![vec![0, 0]]);
        assert_eq!(engine.problem().steps_taken.get(), 0);
    }

    #[test]
    fn both_modes_agree_and_step_once_per_layer() {
        let engine = LayeredEngine::new(counter(5));
        assert_eq!(engine.run(), 15);
        assert_eq!(engine.problem().steps_taken.get(), 5);

        let (cost, frontiers) = engine.run_with_frontiers();
        assert_eq!(cost, 15);
        assert_eq!(frontiers.len(), 6);
        assert_eq!(frontiers[3], vec![3, 6]);
        assert_eq!(engine.into_problem().steps_taken.get(), 10);
    }
}
