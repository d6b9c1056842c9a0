//! Uniform random strategy.

use crate::core::{GameRng, PlayerId};
use crate::players::Strategy;
use crate::referee::Referee;
use crate::rules::GameState;

/// Picks a uniformly random option. Useful as a baseline opponent and as
/// the rollout policy sanity check.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<G: GameState> Strategy<G> for RandomPlayer {
    fn choose_move(&mut self, player: PlayerId, state: &G, _referee: &Referee<G>) -> Option<G> {
        let options = state.options(player);
        self.rng.pick(options)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
