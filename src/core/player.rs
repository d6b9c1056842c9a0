//! Player identification for two-player games.
//!
//! The engine is strictly two-player: player 0 ("Left") always moves
//! first in a session, and every turn hands control to the opponent.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two players.
///
/// Indices are 0-based. By convention player 0 is "Left" and player 1 is
/// "Right"; rulesets may display them under their own names via
/// [`crate::rules::GameState::player_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (index 0). Always moves first.
    pub const LEFT: PlayerId = PlayerId(0);

    /// The second player (index 1).
    pub const RIGHT: PlayerId = PlayerId(1);

    /// Create a player ID from an index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 2, "two-player engine: player index must be 0 or 1");
        Self(index)
    }

    /// Get the raw player index (0 or 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs, in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::LEFT, Self::RIGHT].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
