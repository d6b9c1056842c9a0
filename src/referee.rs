//! The per-session state machine.
//!
//! A [`Referee`] owns exactly one current [`GameState`], knows whose turn
//! it is, detects termination, and decides the winner under the session's
//! [`WinRule`]. It is the only component allowed to commit a move;
//! strategies and views hand it candidate states and observe the outcome.
//!
//! The referee also exposes [`Referee::hypothetical_winner`], a pure
//! oracle that search strategies call reentrantly to ask "if this move
//! were played, would the game end, and who would win?" without touching
//! the live session.

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::rules::{GameState, Verdict, WinRule};

/// How a completed session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The player to move ran out of options.
    Exhausted {
        /// The player who could not move.
        stuck: PlayerId,
    },
    /// A player committed an absent or illegal candidate.
    Forfeit {
        /// The offending player.
        loser: PlayerId,
    },
}

/// Result of a [`Referee::commit`] call, reported rather than thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Move applied; the game continues.
    Accepted,
    /// Move applied and the game is now over.
    Ended(Verdict),
    /// Candidate was absent or illegal; the session is over and the
    /// offender loses.
    Forfeited(Verdict),
    /// The session was already complete; nothing changed.
    Rejected,
}

/// Turn-taking orchestrator for one game session.
///
/// Lifecycle: *InProgress* → *Complete* (absorbing). Player 0 always
/// moves first. Created once per session and dropped with it.
#[derive(Clone, Debug)]
pub struct Referee<G: GameState> {
    state: G,
    to_move: PlayerId,
    completion: Option<Completion>,
    win_rule: WinRule,
}

impl<G: GameState> Referee<G> {
    /// Start a session at `initial` under `win_rule`.
    ///
    /// If player 0 already has no options the session is complete on
    /// arrival and [`Referee::winner`] is immediately valid.
    pub fn new(initial: G, win_rule: WinRule) -> Self {
        let completion = if initial.can_move(PlayerId::LEFT) {
            None
        } else {
            Some(Completion::Exhausted {
                stuck: PlayerId::LEFT,
            })
        };
        Self {
            state: initial,
            to_move: PlayerId::LEFT,
            completion,
            win_rule,
        }
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &G {
        &self.state
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Whether the session has reached its terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// How the session ended, if it has.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    /// The session's win rule.
    #[must_use]
    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// Commit a candidate move for the player to move.
    ///
    /// `None`, or any candidate not equal to a member of the current
    /// option set, is a forfeit: the session completes with the offender
    /// as loser. A legal candidate replaces the state and flips the turn;
    /// if the new mover then has no options the session completes.
    pub fn commit(&mut self, candidate: Option<G>) -> CommitOutcome {
        if self.is_complete() {
            log::warn!("commit on a completed session rejected");
            return CommitOutcome::Rejected;
        }

        let candidate = match candidate {
            Some(c) => c,
            None => return self.forfeit("no candidate supplied"),
        };

        let options = self.state.options(self.to_move);
        if !options.iter().any(|o| *o == candidate) {
            return self.forfeit("candidate not in the current option set");
        }

        self.state = candidate;
        self.to_move = self.to_move.opponent();

        if self.state.can_move(self.to_move) {
            CommitOutcome::Accepted
        } else {
            self.completion = Some(Completion::Exhausted {
                stuck: self.to_move,
            });
            CommitOutcome::Ended(
                self.win_rule
                    .winner_when_stuck(&self.state, self.to_move),
            )
        }
    }

    fn forfeit(&mut self, reason: &str) -> CommitOutcome {
        let loser = self.to_move;
        log::warn!(
            "{} ({}) forfeits: {}",
            loser,
            self.state.player_name(loser),
            reason
        );
        self.completion = Some(Completion::Forfeit { loser });
        CommitOutcome::Forfeited(Verdict::Win(loser.opponent()))
    }

    /// Winner of the session.
    ///
    /// Valid only once the session is complete. A forfeit awards the
    /// non-offending player regardless of the win rule; move exhaustion
    /// delegates to [`WinRule::winner_when_stuck`].
    pub fn winner(&self) -> Result<Verdict> {
        match self.completion {
            None => Err(Error::SessionInProgress),
            Some(Completion::Forfeit { loser }) => Ok(Verdict::Win(loser.opponent())),
            Some(Completion::Exhausted { stuck }) => {
                Ok(self.win_rule.winner_when_stuck(&self.state, stuck))
            }
        }
    }

    /// Pure oracle: if `just_moved_by` had just moved into `candidate`,
    /// would the game be over, and who would win?
    ///
    /// Returns `None` while the would-be mover still has options. Never
    /// mutates the live session; search strategies call it reentrantly
    /// from inside their own computation.
    #[must_use]
    pub fn hypothetical_winner(&self, candidate: &G, just_moved_by: PlayerId) -> Option<Verdict> {
        let would_move = just_moved_by.opponent();
        if candidate.can_move(would_move) {
            None
        } else {
            Some(self.win_rule.winner_when_stuck(candidate, would_move))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Countdown game: either player may subtract 1 while positive.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Countdown(u8);

    impl GameState for Countdown {
        fn options(&self, _player: PlayerId) -> Vec<Self> {
            if self.0 > 0 {
                vec![Countdown(self.0 - 1)]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn test_player_zero_moves_first() {
        let referee = Referee::new(Countdown(3), WinRule::Normal);
        assert_eq!(referee.to_move(), PlayerId::LEFT);
        assert!(!referee.is_complete());
    }

    #[test]
    fn test_commit_flips_turn() {
        let mut referee = Referee::new(Countdown(3), WinRule::Normal);
        let outcome = referee.commit(Some(Countdown(2)));
        assert_eq!(outcome, CommitOutcome::Accepted);
        assert_eq!(referee.to_move(), PlayerId::RIGHT);
        assert_eq!(*referee.state(), Countdown(2));
    }

    #[test]
    fn test_exhaustion_completes_session() {
        let mut referee = Referee::new(Countdown(1), WinRule::Normal);
        // Left moves to 0; Right is stuck; Left made the last move.
        let outcome = referee.commit(Some(Countdown(0)));
        assert_eq!(outcome, CommitOutcome::Ended(Verdict::Win(PlayerId::LEFT)));
        assert!(referee.is_complete());
        assert_eq!(referee.winner().unwrap(), Verdict::Win(PlayerId::LEFT));
    }

    #[test]
    fn test_misere_inverts_the_same_session() {
        let mut normal = Referee::new(Countdown(1), WinRule::Normal);
        let mut misere = Referee::new(Countdown(1), WinRule::Misere);
        normal.commit(Some(Countdown(0)));
        misere.commit(Some(Countdown(0)));
        assert_eq!(normal.winner().unwrap(), Verdict::Win(PlayerId::LEFT));
        assert_eq!(misere.winner().unwrap(), Verdict::Win(PlayerId::RIGHT));
    }

    #[test]
    fn test_commit_none_is_forfeit() {
        let mut referee = Referee::new(Countdown(3), WinRule::Normal);
        let outcome = referee.commit(None);
        assert_eq!(
            outcome,
            CommitOutcome::Forfeited(Verdict::Win(PlayerId::RIGHT))
        );
        assert!(referee.is_complete());
        assert_eq!(
            referee.completion(),
            Some(Completion::Forfeit {
                loser: PlayerId::LEFT
            })
        );
        assert_eq!(referee.winner().unwrap(), Verdict::Win(PlayerId::RIGHT));
    }

    #[test]
    fn test_illegal_candidate_is_forfeit() {
        let mut referee = Referee::new(Countdown(3), WinRule::Normal);
        // Jumping straight to 0 is not an option from 3.
        let outcome = referee.commit(Some(Countdown(0)));
        assert_eq!(
            outcome,
            CommitOutcome::Forfeited(Verdict::Win(PlayerId::RIGHT))
        );
    }

    #[test]
    fn test_commit_after_complete_is_rejected() {
        let mut referee = Referee::new(Countdown(3), WinRule::Normal);
        referee.commit(None);
        let state_before = referee.state().clone();
        assert_eq!(referee.commit(Some(Countdown(2))), CommitOutcome::Rejected);
        assert_eq!(*referee.state(), state_before);
    }

    #[test]
    fn test_forfeit_winner_ignores_win_rule() {
        // Under misère a stuck player would win, but a forfeit must still
        // award the opponent.
        let mut referee = Referee::new(Countdown(3), WinRule::Misere);
        referee.commit(None);
        assert_eq!(referee.winner().unwrap(), Verdict::Win(PlayerId::RIGHT));
    }

    #[test]
    fn test_winner_before_complete_is_error() {
        let referee = Referee::new(Countdown(3), WinRule::Normal);
        assert!(matches!(referee.winner(), Err(Error::SessionInProgress)));
    }

    #[test]
    fn test_start_position_with_no_options_is_complete() {
        let referee = Referee::new(Countdown(0), WinRule::Normal);
        assert!(referee.is_complete());
        assert_eq!(referee.winner().unwrap(), Verdict::Win(PlayerId::RIGHT));
    }

    #[test]
    fn test_hypothetical_winner_detects_termination() {
        let referee = Referee::new(Countdown(2), WinRule::Normal);
        // If Left moved into 0, Right would be stuck and Left would win.
        assert_eq!(
            referee.hypothetical_winner(&Countdown(0), PlayerId::LEFT),
            Some(Verdict::Win(PlayerId::LEFT))
        );
        // If Left moved into 1, Right could still move.
        assert_eq!(
            referee.hypothetical_winner(&Countdown(1), PlayerId::LEFT),
            None
        );
    }

    #[test]
    fn test_hypothetical_winner_respects_win_rule() {
        let referee = Referee::new(Countdown(2), WinRule::Misere);
        assert_eq!(
            referee.hypothetical_winner(&Countdown(0), PlayerId::LEFT),
            Some(Verdict::Win(PlayerId::RIGHT))
        );
    }

    #[test]
    fn test_hypothetical_winner_does_not_mutate() {
        let referee = Referee::new(Countdown(2), WinRule::Normal);
        let state_before = referee.state().clone();
        let to_move_before = referee.to_move();
        let complete_before = referee.is_complete();

        let _ = referee.hypothetical_winner(&Countdown(0), PlayerId::LEFT);
        let _ = referee.hypothetical_winner(&Countdown(1), PlayerId::RIGHT);

        assert_eq!(*referee.state(), state_before);
        assert_eq!(referee.to_move(), to_move_before);
        assert_eq!(referee.is_complete(), complete_before);
    }
}
