//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId); a node
//! points at its parent by index, so the tree is a flat `Vec` with no
//! owning back-pointers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::rules::GameState;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One position in the search tree.
#[derive(Clone, Debug)]
pub struct Node<G: GameState> {
    /// The position this node represents.
    pub state: G,

    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The player to move at this position.
    pub to_move: PlayerId,

    /// Plies from the root.
    pub depth: u16,

    /// Times this node appeared on a backpropagation path.
    pub visits: u32,

    /// Accumulated rollout reward for the player who moved into this
    /// node (wins scored when `to_move` ends up stuck).
    pub value: f64,

    /// Child indices; `None` until expansion, and possibly empty after
    /// it (a stuck position expands to nothing).
    pub children: Option<SmallVec<[NodeId; 8]>>,
}

impl<G: GameState> Node<G> {
    /// Create an unexpanded, unvisited node.
    #[must_use]
    pub fn new(state: G, parent: NodeId, to_move: PlayerId, depth: u16) -> Self {
        Self {
            state,
            parent,
            to_move,
            depth,
            visits: 0,
            value: 0.0,
            children: None,
        }
    }

    /// Average rollout reward; zero before the first visit.
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }

    /// UCB1-style selection score.
    ///
    /// The exploration coefficient is `sibling_count`, the number of
    /// alternatives competing with this child, rather than a fixed
    /// constant. Wider positions therefore explore more aggressively.
    /// Unvisited nodes score infinite so they are always tried first.
    #[must_use]
    pub fn ucb1(&self, parent_visits: u32, sibling_count: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploration =
            (f64::from(parent_visits).ln() / f64::from(self.visits)).sqrt();
        self.mean_value() + sibling_count * exploration
    }

    /// Whether the node's children have been generated.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }
}
