//! Error types for the engine.
//!
//! Forfeits and illegal moves are *data*, not errors: they are reported
//! through [`crate::referee::CommitOutcome`] so observers can react.
//! `Error` covers API misuse only.

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// `winner()` was asked before the session completed.
    #[error("session still in progress: no winner yet")]
    SessionInProgress,

    /// A turn was requested on a completed session.
    #[error("session already complete")]
    SessionComplete,

    /// The session's move cap was reached without termination.
    #[error("move cap of {cap} reached without termination")]
    MoveCapReached {
        /// The configured cap.
        cap: u32,
    },
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
