//! # rust-cgt
//!
//! A reusable decision-making engine for two-player perfect-information
//! combinatorial games.
//!
//! ## Design Principles
//!
//! 1. **Options are states**: A move is represented *as* the resulting
//!    child position, never as a delta. Rulesets only have to produce
//!    their reachable children; the engine never interprets moves.
//!
//! 2. **One orchestrator**: The [`Referee`] is the single source of truth
//!    for whose turn it is and whether the game is over. Strategies never
//!    mutate a session; they only propose candidate states.
//!
//! 3. **Win rules are pluggable**: Normal play, misère play, and scoring
//!    play share one termination test (move exhaustion) and differ only in
//!    a pure winner function, so every search strategy works under all
//!    three without special cases.
//!
//! 4. **Deterministic search**: All randomized strategies draw from a
//!    seeded, forkable [`GameRng`], so a search is reproducible from its
//!    seed.
//!
//! ## Modules
//!
//! - `core`: Player identifiers and deterministic RNG
//! - `rules`: The [`GameState`] contract and win-rule policies
//! - `referee`: The per-session state machine and hypothetical-winner oracle
//! - `players`: Strategies — random choice and exact depth-bounded search
//! - `mcts`: Monte Carlo Tree Search over an arena-allocated tree
//! - `session`: Cooperative turn-taking between two strategies
//! - `games`: Small reference rulesets used by tests and benches

pub mod core;
pub mod error;
pub mod games;
pub mod mcts;
pub mod players;
pub mod referee;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, PlayerId};
pub use crate::error::{Error, Result};
pub use crate::mcts::{MctsConfig, MctsPlayer, SearchStats};
pub use crate::players::{
    ExhaustiveSearchPlayer, Outcome, OutcomeSearchPlayer, RandomPlayer, Strategy,
};
pub use crate::referee::{CommitOutcome, Completion, Referee};
pub use crate::rules::{GameState, Verdict, WinRule};
pub use crate::session::Session;
