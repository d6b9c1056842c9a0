//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Sampling budget: one selection/rollout/backpropagation cycle each.
    pub iterations: u32,

    /// Ply depth of the exact-search call that generates a node's
    /// children on expansion.
    pub expansion_depth: u32,

    /// Random seed for the rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000,
            expansion_depth: 2,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with a custom sampling budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with a custom expansion depth.
    #[must_use]
    pub fn with_expansion_depth(mut self, depth: u32) -> Self {
        self.expansion_depth = depth;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
