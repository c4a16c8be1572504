//! Error type shared by every part of the game core.

use thiserror::Error;

/// Errors from game operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Insufficient entropy: {0}")]
    InsufficientEntropy(String),

    #[error("Digest computation failed: {0}")]
    DigestComputationFailed(String),

    /// The disclosed secret and move do not reproduce the published commitment.
    #[error("Commitment verification failed: the house changed its move after committing")]
    CommitmentVerificationFailed,

    #[error("Round already resolved")]
    RoundAlreadyResolved,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl GameError {
    /// Can the caller retry with different input?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::UnknownMove(_) | GameError::InvalidEncoding(_)
        )
    }
}
