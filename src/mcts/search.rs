//! The MCTS search loop.
//!
//! One `search` call builds a fresh tree, runs the configured number of
//! selection/rollout/backpropagation cycles, and returns the root child
//! with the best average value. Expansion generates children from a
//! shallow exact classification rather than the raw option list, so
//! moves the shallow search already refutes never enter the tree.

use std::time::Instant;

use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId};
use crate::mcts::config::MctsConfig;
use crate::mcts::node::{Node, NodeId};
use crate::mcts::stats::SearchStats;
use crate::mcts::tree::SearchTree;
use crate::players::{classify, Strategy};
use crate::referee::Referee;
use crate::rules::GameState;

/// Monte Carlo Tree Search strategy.
///
/// Rollout results are scored under the normal-play reading (the stuck
/// player loses); see [`MctsConfig`] for the tunable budget and seed.
#[derive(Clone, Debug)]
pub struct MctsPlayer {
    config: MctsConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl MctsPlayer {
    /// Create a player from a configuration.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run a full search from `state` with `player` to move and return
    /// the best move, or `None` if the position has no viable options.
    pub fn search<G: GameState>(&mut self, state: &G, player: PlayerId) -> Option<G> {
        let start = Instant::now();
        let tree = self.run(state, player);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let root_children = tree.get(tree.root()).children.clone()?;
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &root_children {
            let node = tree.get(child);
            if node.visits == 0 {
                continue;
            }
            let mean = node.mean_value();
            // Strictly greater keeps the first-found child on ties.
            match best {
                Some((_, top)) if mean <= top => {}
                _ => best = Some((child, mean)),
            }
        }
        let choice = best.map(|(id, _)| tree.get(id).state.clone());
        log::debug!("search finished: {}", self.stats);
        choice
    }

    /// Build and sample the tree; the decision is taken separately so
    /// tests can inspect the final tree shape.
    fn run<G: GameState>(&mut self, state: &G, player: PlayerId) -> SearchTree<G> {
        self.stats = SearchStats::default();
        let mut tree = SearchTree::new(state.clone(), player);
        let root = tree.root();

        // Expanding the root up front means every iteration descends
        // into exactly one root child, so root-child visits sum to the
        // sampling budget.
        self.expand(&mut tree, root);
        let root_childless = tree
            .get(root)
            .children
            .as_ref()
            .map_or(true, |c| c.is_empty());
        if root_childless {
            return tree;
        }

        for _ in 0..self.config.iterations {
            let target = self.select(&mut tree);
            let (rollout_state, rollout_mover) = {
                let node = tree.get(target);
                (node.state.clone(), node.to_move)
            };
            let stuck = self.rollout(rollout_state, rollout_mover);
            Self::backpropagate(&mut tree, target, stuck);
            self.stats.iterations += 1;
        }
        tree
    }

    /// Descend from the root to the node the next rollout starts from,
    /// expanding a visited leaf on the way.
    fn select<G: GameState>(&mut self, tree: &mut SearchTree<G>) -> NodeId {
        let mut current = tree.root();
        loop {
            self.stats.max_depth = self.stats.max_depth.max(tree.get(current).depth);
            match tree.get(current).children.clone() {
                Some(children) if !children.is_empty() => {
                    if let Some(&unvisited) =
                        children.iter().find(|&&c| tree.get(c).visits == 0)
                    {
                        return unvisited;
                    }
                    let parent_visits = tree.get(current).visits;
                    let siblings = (children.len() - 1) as f64;
                    let mut best = children[0];
                    let mut best_score = tree.get(best).ucb1(parent_visits, siblings);
                    for &child in children.iter().skip(1) {
                        let score = tree.get(child).ucb1(parent_visits, siblings);
                        if score > best_score {
                            best = child;
                            best_score = score;
                        }
                    }
                    current = best;
                }
                // Expanded to nothing: a terminal position, roll out here
                // (the rollout ends immediately).
                Some(_) => return current,
                None => {
                    if tree.get(current).visits == 0 {
                        return current;
                    }
                    self.expand(tree, current);
                    match tree.get(current).children.as_ref() {
                        Some(children) if !children.is_empty() => return children[0],
                        _ => return current,
                    }
                }
            }
        }
    }

    /// Generate a node's children from a shallow exact classification.
    /// The child set is the classification's move set, not the full
    /// option list.
    fn expand<G: GameState>(&mut self, tree: &mut SearchTree<G>, id: NodeId) {
        let (state, to_move, depth) = {
            let node = tree.get(id);
            (node.state.clone(), node.to_move, node.depth)
        };
        let moves = classify(&state, to_move, self.config.expansion_depth).into_moves();
        let mut children: SmallVec<[NodeId; 8]> = SmallVec::new();
        for child_state in moves {
            let child = Node::new(child_state, id, to_move.opponent(), depth + 1);
            children.push(tree.alloc(child));
            self.stats.nodes_expanded += 1;
        }
        tree.get_mut(id).children = Some(children);
    }

    /// Play uniformly random moves until someone is stuck; returns the
    /// stuck player.
    fn rollout<G: GameState>(&mut self, mut state: G, mut mover: PlayerId) -> PlayerId {
        self.stats.rollouts += 1;
        loop {
            let options = state.options(mover);
            match self.rng.pick(options) {
                None => return mover,
                Some(next) => {
                    state = next;
                    mover = mover.opponent();
                }
            }
        }
    }

    /// Credit the rollout along the path back to the root.
    ///
    /// A node's value belongs to the player who moved into it. That
    /// player wins the playout exactly when the node's own mover ends up
    /// stuck, so the reward condition is `stuck == to_move`. Scoring it
    /// from the to-move side instead would make the root decision favor
    /// the opponent's best moves.
    fn backpropagate<G: GameState>(tree: &mut SearchTree<G>, from: NodeId, stuck: PlayerId) {
        let mut current = from;
        while !current.is_none() {
            let node = tree.get_mut(current);
            node.visits += 1;
            if stuck == node.to_move {
                node.value += 1.0;
            }
            current = node.parent;
        }
    }
}

impl Default for MctsPlayer {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}

impl<G: GameState> Strategy<G> for MctsPlayer {
    fn choose_move(&mut self, player: PlayerId, state: &G, _referee: &Referee<G>) -> Option<G> {
        self.search(state, player)
    }

    fn name(&self) -> &'static str {
        "mcts"
    }
}
