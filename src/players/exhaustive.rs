//! Depth-bounded exact search.
//!
//! Two deliberately separate algorithms live here:
//!
//! - [`classify`] computes an exact [`Outcome`] for a position with the
//!   outcome algebra. [`OutcomeSearchPlayer`] plays directly from it, and
//!   MCTS expansion reuses it for shallow lookahead; both depend on its
//!   specific tie-breaking (fastest win, slowest loss).
//! - [`ExhaustiveSearchPlayer`] ranks each candidate move through the
//!   referee's [`hypothetical_winner`](crate::referee::Referee::hypothetical_winner)
//!   oracle. Because it never inspects the win rule itself, it plays
//!   normal, misère, and scoring games uniformly.

use crate::core::{GameRng, PlayerId};
use crate::players::{Outcome, Strategy};
use crate::referee::Referee;
use crate::rules::{GameState, Verdict};

/// Exact win/loss classification of `state` for the player to move.
///
/// Base cases: no options is a loss at depth 0 (the player is stuck);
/// an exhausted depth budget is `Undecided` over every option. Otherwise
/// each option is classified from the opponent's perspective one ply
/// shallower, reversed, and folded into the running best. The fold stops
/// as soon as a one-ply win appears, since no other option can beat it;
/// deeper wins do not stop the fold because a faster one may follow.
#[must_use]
pub fn classify<G: GameState>(state: &G, player: PlayerId, depth: u32) -> Outcome<G> {
    let options = state.options(player);
    if options.is_empty() {
        return Outcome::Loss {
            moves: vec![],
            depth: 0,
        };
    }
    if depth == 0 {
        return Outcome::Undecided {
            moves: options,
            depth: 0,
        };
    }

    let mut best = Outcome::Empty;
    for option in options {
        let below = classify(&option, player.opponent(), depth - 1);
        best = best.combine(below.reversed(option));
        if matches!(best, Outcome::Win { depth: 1, .. }) {
            break;
        }
    }
    best
}

/// Plays the move set of an exact [`classify`] call.
///
/// Forced wins are taken as fast as possible, forced losses delayed as
/// long as possible, and among tied-optimal moves one is chosen
/// uniformly at random.
#[derive(Clone, Debug)]
pub struct OutcomeSearchPlayer {
    max_depth: u32,
    rng: GameRng,
}

impl OutcomeSearchPlayer {
    /// Create a player searching `max_depth` plies deep.
    #[must_use]
    pub fn new(max_depth: u32, seed: u64) -> Self {
        Self {
            max_depth,
            rng: GameRng::new(seed),
        }
    }

    /// The configured search depth in plies.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl<G: GameState> Strategy<G> for OutcomeSearchPlayer {
    fn choose_move(&mut self, player: PlayerId, state: &G, _referee: &Referee<G>) -> Option<G> {
        let outcome = classify(state, player, self.max_depth);
        self.rng.pick(outcome.into_moves())
    }

    fn name(&self) -> &'static str {
        "outcome-search"
    }
}

/// Valuation of one candidate move, as seen through the oracle.
#[derive(Clone, Copy, Debug)]
struct Probe {
    /// Whether a terminal verdict was actually reached within budget.
    decided: bool,
    /// +1 if player 0 wins the line, -1 if player 1 does, 0 otherwise.
    value: i64,
    /// Plies until the line resolves (or the budget runs out).
    depth: u32,
}

fn verdict_value(verdict: Verdict) -> i64 {
    match verdict {
        Verdict::Win(p) if p == PlayerId::LEFT => 1,
        Verdict::Win(_) => -1,
        Verdict::Draw => 0,
    }
}

/// +1 if `player` wants the probe value maximized, -1 if minimized.
fn orientation(player: PlayerId) -> i64 {
    if player == PlayerId::LEFT {
        1
    } else {
        -1
    }
}

/// The better of two probes from `mover`'s point of view. On equal
/// values a winning line prefers the smaller depth, a losing line the
/// larger; neutral lines keep the first found.
fn better_for(mover: PlayerId, a: Probe, b: Probe) -> Probe {
    let (ka, kb) = (a.value * orientation(mover), b.value * orientation(mover));
    match ka.cmp(&kb) {
        std::cmp::Ordering::Less => b,
        std::cmp::Ordering::Greater => a,
        std::cmp::Ordering::Equal if ka > 0 => {
            if b.depth < a.depth {
                b
            } else {
                a
            }
        }
        std::cmp::Ordering::Equal if ka < 0 => {
            if b.depth > a.depth {
                b
            } else {
                a
            }
        }
        std::cmp::Ordering::Equal => a,
    }
}

/// Depth-bounded minimax over the referee's termination oracle.
///
/// Every candidate move is probed: a move the oracle calls terminal is
/// valued by its verdict at depth 1; otherwise the opponent's best reply
/// is probed one ply shallower. Player 0 keeps the maximal-valued moves,
/// player 1 the minimal, with a fastest-win or slowest-loss depth
/// preference, and one of the survivors is played uniformly at random.
/// Win-rule agnostic: only the oracle ever inspects the rule.
#[derive(Clone, Debug)]
pub struct ExhaustiveSearchPlayer {
    max_depth: u32,
    rng: GameRng,
}

impl ExhaustiveSearchPlayer {
    /// Create a player searching `max_depth` plies deep.
    #[must_use]
    pub fn new(max_depth: u32, seed: u64) -> Self {
        Self {
            max_depth,
            rng: GameRng::new(seed),
        }
    }

    /// The configured search depth in plies.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Value of moving into `child`, where `just_moved` made that move.
    fn probe<G: GameState>(
        referee: &Referee<G>,
        child: &G,
        just_moved: PlayerId,
        budget: u32,
    ) -> Probe {
        if let Some(verdict) = referee.hypothetical_winner(child, just_moved) {
            return Probe {
                decided: true,
                value: verdict_value(verdict),
                depth: 1,
            };
        }
        if budget <= 1 {
            return Probe {
                decided: false,
                value: 0,
                depth: 1,
            };
        }

        let opponent = just_moved.opponent();
        let mut best: Option<Probe> = None;
        for reply in child.options(opponent) {
            let probe = Self::probe(referee, &reply, opponent, budget - 1);
            best = Some(match best {
                None => probe,
                Some(current) => better_for(opponent, current, probe),
            });
        }
        match best {
            Some(mut b) => {
                b.depth += 1;
                b
            }
            // Unreachable while the oracle and options agree; valued as
            // an unresolved line rather than trusted blindly.
            None => Probe {
                decided: false,
                value: 0,
                depth: 1,
            },
        }
    }
}

impl<G: GameState> Strategy<G> for ExhaustiveSearchPlayer {
    fn choose_move(&mut self, player: PlayerId, state: &G, referee: &Referee<G>) -> Option<G> {
        let options = state.options(player);
        if options.is_empty() {
            return None;
        }

        let scored: Vec<(G, Probe)> = options
            .into_iter()
            .map(|option| {
                let probe = Self::probe(referee, &option, player, self.max_depth.max(1));
                (option, probe)
            })
            .collect();

        let orient = orientation(player);
        let best_key = scored.iter().map(|(_, p)| p.value * orient).max()?;
        let at_best = || scored.iter().filter(move |(_, p)| p.value * orient == best_key);

        let keep_depth = if best_key > 0 {
            at_best().map(|(_, p)| p.depth).min()
        } else if best_key < 0 {
            at_best().map(|(_, p)| p.depth).max()
        } else {
            None
        };

        if best_key == 0 && scored.iter().all(|(_, p)| !p.decided) {
            log::debug!("no decided line within {} plies", self.max_depth);
        }

        let retained: Vec<G> = scored
            .into_iter()
            .filter(|(_, p)| {
                p.value * orient == best_key && keep_depth.map_or(true, |d| p.depth == d)
            })
            .map(|(option, _)| option)
            .collect();
        self.rng.pick(retained)
    }

    fn name(&self) -> &'static str {
        "exhaustive-search"
    }
}
