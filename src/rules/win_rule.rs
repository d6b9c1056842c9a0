//! Win-rule policies: normal, misère, and scoring play.
//!
//! All three share the same termination test — the player to move has no
//! options — and differ only in who is declared the winner at that
//! moment. Keeping that decision in one pure function is what lets a
//! single search algorithm serve every rule without special cases.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Single winner.
    Win(PlayerId),
    /// Draw (scoring play only; normal and misère always produce a winner).
    Draw,
}

impl Verdict {
    /// Check if a player won.
    #[must_use]
    pub fn is_win_for(self, player: PlayerId) -> bool {
        matches!(self, Verdict::Win(p) if p == player)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win(p) => write!(f, "{} wins", p),
            Verdict::Draw => write!(f, "draw"),
        }
    }
}

/// End-of-game policy for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinRule {
    /// The player unable to move loses.
    #[default]
    Normal,
    /// The player unable to move wins.
    Misere,
    /// The sign of [`GameState::score`] decides: positive → player 0,
    /// negative → player 1, zero → draw.
    Scoring,
}

impl WinRule {
    /// Winner of a terminal position in which `stuck` cannot move.
    ///
    /// Pure: callers may evaluate hypothetical positions freely without
    /// touching any live session state.
    #[must_use]
    pub fn winner_when_stuck<G: GameState>(self, state: &G, stuck: PlayerId) -> Verdict {
        match self {
            WinRule::Normal => Verdict::Win(stuck.opponent()),
            WinRule::Misere => Verdict::Win(stuck),
            WinRule::Scoring => match state.score().cmp(&0) {
                std::cmp::Ordering::Greater => Verdict::Win(PlayerId::LEFT),
                std::cmp::Ordering::Less => Verdict::Win(PlayerId::RIGHT),
                std::cmp::Ordering::Equal => Verdict::Draw,
            },
        }
    }
}
