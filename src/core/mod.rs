//! Core engine types: player identifiers and deterministic RNG.
//!
//! Everything here is game-agnostic and free of game-rule knowledge.

pub mod player;
pub mod rng;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
