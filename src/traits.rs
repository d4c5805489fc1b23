//! Core trait definition for layered dynamic programs.
//!
//! A layered DP computes one frontier per layer, where layer `i + 1`
//! depends only on layer `i` and fixed problem data. Implement
//! [`LayeredProblem`] for a struct holding the instance and let
//! [`LayeredEngine`](crate::engine::LayeredEngine) drive the layers.

/// Trait for a layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `init_frontier()` is the frontier at layer 0.
/// - `forward_step(i, frontier)` maps layer `i` to layer `i + 1`.
/// - `extract_cost` reads the objective from the frontier at layer `T`.
pub trait LayeredProblem {
    /// Representation of the DP values on one layer (e.g. a table row).
    type Frontier: Clone;

    /// Objective type.
    type Cost: Copy + Ord;

    /// Number of DP steps `T`.
    fn num_layers(&self) -> usize;

    /// Initialize the frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from layer `layer` to `layer + 1`.
    ///
    /// Must only depend on `frontier_i` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier;

    /// Extract the objective value from the final frontier.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
