//! Single-pile subtraction game.
//!
//! "Take 1 to `max_take` stones from a pile of `pile`." Small enough to
//! verify search behavior by hand: under normal play with `max_take = k`
//! the losing positions are the multiples of `k + 1`.

use crate::core::PlayerId;
use crate::rules::GameState;

/// Single-pile Nim position.
///
/// Tracks how many stones each player has taken so the same ruleset also
/// exercises scoring play (the score is the taken-stone differential).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nim {
    pile: u32,
    max_take: u32,
    taken: [u32; 2],
}

impl Nim {
    /// A fresh pile of `pile` stones, at most `max_take` per move.
    #[must_use]
    pub fn new(pile: u32, max_take: u32) -> Self {
        Self {
            pile,
            max_take: max_take.max(1),
            taken: [0, 0],
        }
    }

    /// Stones remaining.
    #[must_use]
    pub fn pile(&self) -> u32 {
        self.pile
    }

    /// Stones `player` has taken so far.
    #[must_use]
    pub fn taken_by(&self, player: PlayerId) -> u32 {
        self.taken[player.index()]
    }
}

impl GameState for Nim {
    fn options(&self, player: PlayerId) -> Vec<Self> {
        (1..=self.max_take.min(self.pile))
            .map(|take| {
                let mut next = self.clone();
                next.pile -= take;
                next.taken[player.index()] += take;
                next
            })
            .collect()
    }

    fn score(&self) -> i64 {
        i64::from(self.taken[0]) - i64::from(self.taken[1])
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pile {} (taken {}/{})",
            self.pile, self.taken[0], self.taken[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_count_tracks_pile() {
        assert_eq!(Nim::new(5, 2).options(PlayerId::LEFT).len(), 2);
        assert_eq!(Nim::new(1, 2).options(PlayerId::LEFT).len(), 1);
        assert_eq!(Nim::new(0, 2).options(PlayerId::LEFT).len(), 0);
    }

    #[test]
    fn test_options_decrease_pile_and_credit_taker() {
        let options = Nim::new(5, 2).options(PlayerId::RIGHT);
        assert_eq!(options[0].pile(), 4);
        assert_eq!(options[0].taken_by(PlayerId::RIGHT), 1);
        assert_eq!(options[0].taken_by(PlayerId::LEFT), 0);
        assert_eq!(options[1].pile(), 3);
        assert_eq!(options[1].taken_by(PlayerId::RIGHT), 2);
    }

    #[test]
    fn test_score_is_taken_differential() {
        let mut nim = Nim::new(6, 3);
        nim = nim.options(PlayerId::LEFT).remove(2); // Left takes 3
        nim = nim.options(PlayerId::RIGHT).remove(0); // Right takes 1
        assert_eq!(nim.score(), 2);
    }

    #[test]
    fn test_max_take_floor_of_one() {
        // A zero take limit would make every position stuck on arrival.
        let nim = Nim::new(3, 0);
        assert_eq!(nim.options(PlayerId::LEFT).len(), 1);
    }
}
