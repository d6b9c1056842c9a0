//! Move-selection strategies.
//!
//! A [`Strategy`] picks one of the current position's options (or
//! declines, which the referee treats as a forfeit). Strategies receive
//! the referee by shared reference so they can consult its win rule and
//! termination oracle, but only the session driver commits moves.

pub mod exhaustive;
pub mod outcome;
pub mod random;

pub use exhaustive::{classify, ExhaustiveSearchPlayer, OutcomeSearchPlayer};
pub use outcome::Outcome;
pub use random::RandomPlayer;

use crate::core::PlayerId;
use crate::referee::Referee;
use crate::rules::GameState;

/// A move-selection policy for one player.
///
/// `choose_move` returns the chosen child state, or `None` to decline
/// (the referee scores a declination as a forfeit). Implementations may
/// mutate internal state such as RNGs or statistics between calls.
pub trait Strategy<G: GameState> {
    /// Choose one of `state.options(player)`, or `None` to decline.
    fn choose_move(&mut self, player: PlayerId, state: &G, referee: &Referee<G>) -> Option<G>;

    /// Short human-readable strategy name, for logs and transcripts.
    fn name(&self) -> &'static str;
}
