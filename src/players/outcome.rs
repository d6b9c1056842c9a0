//! Game-theoretic position values for depth-bounded exact search.
//!
//! An [`Outcome`] values a position from the perspective of the player
//! about to move there. Besides the verdict it carries the set of moves
//! realizing it and the forced depth in plies, so a caller can both act
//! on the value and prefer faster wins or slower losses.

use crate::rules::GameState;

/// Value of a position for the player to move, with realizing moves and
/// forced depth.
///
/// Depth counts plies along the forced line. `Empty` is the identity for
/// [`Outcome::combine`] and the starting accumulator of a fold over
/// sibling options.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<G: GameState> {
    /// The player to move can force a win.
    Win {
        /// Moves realizing the fastest known forced win.
        moves: Vec<G>,
        /// Plies to the end under the fastest forced win.
        depth: u32,
    },
    /// Every move loses; the opponent can force a win.
    Loss {
        /// Moves delaying the loss the longest.
        moves: Vec<G>,
        /// Plies the loss can be delayed.
        depth: u32,
    },
    /// The depth budget ran out before the position resolved.
    Undecided {
        /// Moves whose value is still unknown.
        moves: Vec<G>,
        /// Plies searched before giving up.
        depth: u32,
    },
    /// No options considered yet; identity element.
    Empty,
}

impl<G: GameState> Outcome<G> {
    /// Whether this outcome is a forced win.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }

    /// Forced depth in plies; zero for `Empty`.
    #[must_use]
    pub fn depth(&self) -> u32 {
        match self {
            Outcome::Win { depth, .. }
            | Outcome::Loss { depth, .. }
            | Outcome::Undecided { depth, .. } => *depth,
            Outcome::Empty => 0,
        }
    }

    /// The realizing move set, empty for `Empty`.
    #[must_use]
    pub fn moves(&self) -> &[G] {
        match self {
            Outcome::Win { moves, .. }
            | Outcome::Loss { moves, .. }
            | Outcome::Undecided { moves, .. } => moves,
            Outcome::Empty => &[],
        }
    }

    /// Consume the outcome and take its move set.
    #[must_use]
    pub fn into_moves(self) -> Vec<G> {
        match self {
            Outcome::Win { moves, .. }
            | Outcome::Loss { moves, .. }
            | Outcome::Undecided { moves, .. } => moves,
            Outcome::Empty => vec![],
        }
    }

    /// Lift a child's outcome one ply up to its parent.
    ///
    /// A child the opponent wins is a move the parent loses by, and vice
    /// versa; the move set is replaced by the single move `realizing`
    /// that reaches the child, and depth grows by one ply. `Empty` (the
    /// child had no options at all) means moving there strands the
    /// opponent, an immediate win.
    #[must_use]
    pub fn reversed(self, realizing: G) -> Outcome<G> {
        match self {
            Outcome::Win { depth, .. } => Outcome::Loss {
                moves: vec![realizing],
                depth: depth + 1,
            },
            Outcome::Loss { depth, .. } => Outcome::Win {
                moves: vec![realizing],
                depth: depth + 1,
            },
            Outcome::Undecided { depth, .. } => Outcome::Undecided {
                moves: vec![realizing],
                depth: depth + 1,
            },
            Outcome::Empty => Outcome::Win {
                moves: vec![realizing],
                depth: 1,
            },
        }
    }

    /// Merge the valuations of two sibling move sets.
    ///
    /// Win dominates everything; among wins the faster is kept and equal
    /// depths merge their move sets. Undecided beats Loss. Among losses
    /// the slower is kept, equal depths merging. Undecided merges with
    /// Undecided at the smaller depth. `Empty` is the identity.
    #[must_use]
    pub fn combine(self, other: Outcome<G>) -> Outcome<G> {
        use Outcome::{Empty, Loss, Undecided, Win};
        match (self, other) {
            (Empty, o) | (o, Empty) => o,

            (
                Win {
                    moves: mut a,
                    depth: da,
                },
                Win {
                    moves: b,
                    depth: db,
                },
            ) => match da.cmp(&db) {
                std::cmp::Ordering::Less => Win { moves: a, depth: da },
                std::cmp::Ordering::Greater => Win { moves: b, depth: db },
                std::cmp::Ordering::Equal => {
                    a.extend(b);
                    Win { moves: a, depth: da }
                }
            },
            (w @ Win { .. }, _) | (_, w @ Win { .. }) => w,

            (
                Undecided {
                    moves: mut a,
                    depth: da,
                },
                Undecided {
                    moves: b,
                    depth: db,
                },
            ) => {
                a.extend(b);
                Undecided {
                    moves: a,
                    depth: da.min(db),
                }
            }
            (u @ Undecided { .. }, Loss { .. }) | (Loss { .. }, u @ Undecided { .. }) => u,

            (
                Loss {
                    moves: mut a,
                    depth: da,
                },
                Loss {
                    moves: b,
                    depth: db,
                },
            ) => match da.cmp(&db) {
                std::cmp::Ordering::Greater => Loss { moves: a, depth: da },
                std::cmp::Ordering::Less => Loss { moves: b, depth: db },
                std::cmp::Ordering::Equal => {
                    a.extend(b);
                    Loss { moves: a, depth: da }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct S(u8);

    impl GameState for S {
        fn options(&self, _player: PlayerId) -> Vec<Self> {
            vec![]
        }
    }

    fn win(moves: Vec<S>, depth: u32) -> Outcome<S> {
        Outcome::Win { moves, depth }
    }

    fn loss(moves: Vec<S>, depth: u32) -> Outcome<S> {
        Outcome::Loss { moves, depth }
    }

    fn undecided(moves: Vec<S>, depth: u32) -> Outcome<S> {
        Outcome::Undecided { moves, depth }
    }

    #[test]
    fn test_reversal_flips_and_deepens() {
        assert_eq!(win(vec![S(9)], 2).reversed(S(1)), loss(vec![S(1)], 3));
        assert_eq!(loss(vec![S(9)], 2).reversed(S(1)), win(vec![S(1)], 3));
        assert_eq!(
            undecided(vec![S(9)], 2).reversed(S(1)),
            undecided(vec![S(1)], 3)
        );
    }

    #[test]
    fn test_reversed_empty_is_immediate_win() {
        assert_eq!(Outcome::Empty.reversed(S(1)), win(vec![S(1)], 1));
    }

    #[test]
    fn test_empty_is_identity() {
        let w = win(vec![S(1)], 2);
        assert_eq!(Outcome::Empty.combine(w.clone()), w);
        assert_eq!(w.clone().combine(Outcome::Empty), w);
        assert_eq!(
            Outcome::<S>::Empty.combine(Outcome::Empty),
            Outcome::Empty
        );
    }

    #[test]
    fn test_win_dominates() {
        let w = win(vec![S(1)], 3);
        assert_eq!(w.clone().combine(loss(vec![S(2)], 1)), w);
        assert_eq!(undecided(vec![S(2)], 1).combine(w.clone()), w);
    }

    #[test]
    fn test_faster_win_preferred() {
        let fast = win(vec![S(1)], 1);
        let slow = win(vec![S(2)], 3);
        assert_eq!(fast.clone().combine(slow.clone()), fast);
        assert_eq!(slow.combine(fast.clone()), fast);
    }

    #[test]
    fn test_equal_depth_wins_merge_moves() {
        let merged = win(vec![S(1)], 2).combine(win(vec![S(2)], 2));
        assert_eq!(merged, win(vec![S(1), S(2)], 2));
    }

    #[test]
    fn test_slower_loss_preferred() {
        let quick = loss(vec![S(1)], 1);
        let slow = loss(vec![S(2)], 4);
        assert_eq!(quick.clone().combine(slow.clone()), slow);
        assert_eq!(slow.clone().combine(quick), slow);
    }

    #[test]
    fn test_equal_depth_losses_merge_moves() {
        let merged = loss(vec![S(1)], 2).combine(loss(vec![S(2)], 2));
        assert_eq!(merged, loss(vec![S(1), S(2)], 2));
    }

    #[test]
    fn test_undecided_beats_loss() {
        let u = undecided(vec![S(1)], 1);
        assert_eq!(u.clone().combine(loss(vec![S(2)], 5)), u);
        assert_eq!(loss(vec![S(2)], 5).combine(u.clone()), u);
    }

    #[test]
    fn test_undecided_merge_takes_min_depth() {
        let merged = undecided(vec![S(1)], 3).combine(undecided(vec![S(2)], 1));
        assert_eq!(merged, undecided(vec![S(1), S(2)], 1));
    }

    #[test]
    fn test_combine_is_commutative_on_values() {
        // Move-set order may differ; verdict and depth must not.
        let cases = [
            (win(vec![S(1)], 2), loss(vec![S(2)], 3)),
            (undecided(vec![S(1)], 2), loss(vec![S(2)], 3)),
            (win(vec![S(1)], 2), undecided(vec![S(2)], 3)),
        ];
        for (a, b) in cases {
            let ab = a.clone().combine(b.clone());
            let ba = b.combine(a);
            assert_eq!(ab.is_win(), ba.is_win());
            assert_eq!(ab.depth(), ba.depth());
        }
    }
}
