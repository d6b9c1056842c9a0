//! Monte Carlo Tree Search.
//!
//! A fresh arena-allocated tree is built for every decision and
//! discarded afterwards; nothing is carried between moves. Node
//! references are indices into the arena, never owning pointers.

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MctsConfig;
pub use node::{Node, NodeId};
pub use search::MctsPlayer;
pub use stats::SearchStats;
pub use tree::SearchTree;
