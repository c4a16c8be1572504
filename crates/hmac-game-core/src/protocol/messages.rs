//! Protocol messages.
//!
//! Both messages serialize to JSON with byte strings as hex, so they can cross
//! a wire unchanged. The reveal must only be sent after the user's move.

use super::types::{Outcome, RoundId};
use crate::crypto::{verify_commitment, Commitment, Secret};
use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Phase 1: house publishes its commitment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub round_id: RoundId,
    pub commitment: Commitment,
}

/// Phase 2: house discloses its move and secret
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealMessage {
    pub round_id: RoundId,
    pub house_move: String,
    pub user_move: String,
    pub secret: Secret,
    pub outcome: Outcome,
}

impl RevealMessage {
    /// Check this reveal against the commitment received earlier
    pub fn verify_against(&self, commit: &CommitMessage) -> Result<(), GameError> {
        if self.round_id != commit.round_id {
            return Err(GameError::CommitmentVerificationFailed);
        }
        if !verify_commitment(&self.secret, &self.house_move, &commit.commitment) {
            return Err(GameError::CommitmentVerificationFailed);
        }
        Ok(())
    }
}
