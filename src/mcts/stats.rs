//! Search statistics.

use serde::{Deserialize, Serialize};

/// Counters from one [`MctsPlayer::search`](crate::mcts::MctsPlayer::search)
/// call. Reset at the start of every search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed selection/rollout/backpropagation cycles.
    pub iterations: u32,

    /// Random playouts performed.
    pub rollouts: u32,

    /// Nodes allocated during expansion (excludes the root).
    pub nodes_expanded: u32,

    /// Deepest node touched during selection, in plies from the root.
    pub max_depth: u16,

    /// Wall-clock duration of the search in microseconds.
    pub time_us: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} iterations, {} rollouts, {} nodes, depth {}, {}us",
            self.iterations, self.rollouts, self.nodes_expanded, self.max_depth, self.time_us
        )
    }
}
