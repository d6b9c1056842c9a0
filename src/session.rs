//! Cooperative turn-taking between two strategies.
//!
//! A [`Session`] wires two [`Strategy`] values to one [`Referee`] and
//! drives the game on the calling thread: ask the mover, commit, repeat.
//! There is no timeout or cancellation; a strategy's decision runs to
//! completion before the next turn starts.

use crate::error::{Error, Result};
use crate::players::Strategy;
use crate::referee::{CommitOutcome, Referee};
use crate::rules::{GameState, Verdict, WinRule};

/// One game between two strategies.
pub struct Session<G: GameState> {
    referee: Referee<G>,
    strategies: [Box<dyn Strategy<G>>; 2],
    move_cap: Option<u32>,
    moves_played: u32,
}

impl<G: GameState> Session<G> {
    /// Create a session; `left` moves first.
    #[must_use]
    pub fn new(
        initial: G,
        left: Box<dyn Strategy<G>>,
        right: Box<dyn Strategy<G>>,
        win_rule: WinRule,
    ) -> Self {
        Self {
            referee: Referee::new(initial, win_rule),
            strategies: [left, right],
            move_cap: None,
            moves_played: 0,
        }
    }

    /// Abort [`play_to_completion`](Session::play_to_completion) after
    /// `cap` moves. Guards against rulesets that never terminate.
    #[must_use]
    pub fn with_move_cap(mut self, cap: u32) -> Self {
        self.move_cap = Some(cap);
        self
    }

    /// The underlying referee, for observers.
    #[must_use]
    pub fn referee(&self) -> &Referee<G> {
        &self.referee
    }

    /// Moves committed so far (forfeiting attempts included).
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Play a single turn: ask the mover's strategy and commit its
    /// choice.
    pub fn step(&mut self) -> Result<CommitOutcome> {
        if self.referee.is_complete() {
            return Err(Error::SessionComplete);
        }
        if let Some(cap) = self.move_cap {
            if self.moves_played >= cap {
                return Err(Error::MoveCapReached { cap });
            }
        }

        let player = self.referee.to_move();
        let strategy = &mut self.strategies[player.index()];
        let choice = strategy.choose_move(player, self.referee.state(), &self.referee);
        log::debug!(
            "move {}: {} ({}) {}",
            self.moves_played + 1,
            player,
            strategy.name(),
            if choice.is_some() { "moves" } else { "declines" },
        );
        let outcome = self.referee.commit(choice);
        self.moves_played += 1;
        Ok(outcome)
    }

    /// Drive the session until it completes and return the verdict.
    pub fn play_to_completion(&mut self) -> Result<Verdict> {
        while !self.referee.is_complete() {
            self.step()?;
        }
        let verdict = self.referee.winner()?;
        log::info!("session over after {} moves: {}", self.moves_played, verdict);
        Ok(verdict)
    }
}

impl<G: GameState> std::fmt::Debug for Session<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("referee", &self.referee)
            .field("moves_played", &self.moves_played)
            .field("move_cap", &self.move_cap)
            .finish_non_exhaustive()
    }
}
