//! Reference rulesets.
//!
//! The engine itself contains no game rules; these small games exist so
//! tests, benches, and demos have something concrete to play.

pub mod gomoku;
pub mod nim;

pub use gomoku::Gomoku;
pub use nim::Nim;
