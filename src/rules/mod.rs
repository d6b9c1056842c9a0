//! The game-state contract and win-rule policies.
//!
//! Rulesets implement [`GameState`] to plug into the engine; the engine
//! never contains game-specific logic.

pub mod game;
pub mod win_rule;

pub use game::GameState;
pub use win_rule::{Verdict, WinRule};
