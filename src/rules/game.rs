//! The `GameState` contract all rulesets implement.
//!
//! A position is an opaque value. A move is represented *as* the
//! resulting child position, so the engine validates and applies moves
//! purely through cloning and value equality — it never needs a move
//! type, a delta format, or any rule knowledge.

use crate::core::PlayerId;

/// Contract between a ruleset and the engine.
///
/// ## Implementor obligations
///
/// - [`options`](GameState::options) must never mutate the receiver, and
///   every returned option must be a freshly-owned value.
/// - Equality must be consistent with options: two states an
///   implementation treats as equal must offer equal option sets. The
///   engine does not (cannot) enforce this generically; violating it is
///   a programming error in the ruleset, and engine behavior on such a
///   ruleset is unspecified.
/// - Any construction failure (bad board size, malformed setup) must be
///   handled before a state enters the engine. The contract itself has
///   no error conditions.
pub trait GameState: Clone + PartialEq + std::fmt::Debug {
    /// All positions `player` can move to from this one.
    ///
    /// An empty vector means `player` cannot move, which under normal and
    /// misère play means the game is over.
    fn options(&self, player: PlayerId) -> Vec<Self>;

    /// Display name for a player index.
    fn player_name(&self, player: PlayerId) -> &str {
        if player == PlayerId::LEFT {
            "Left"
        } else {
            "Right"
        }
    }

    /// Numeric score of the position, used only by scoring play.
    ///
    /// Positive favors player 0, negative favors player 1, zero is a
    /// draw. Games meant for normal or misère play can keep the default.
    fn score(&self) -> i64 {
        0
    }

    /// Whether `player` has at least one option.
    fn can_move(&self, player: PlayerId) -> bool {
        !self.options(player).is_empty()
    }
}
