//! Round lifecycle: commit first, then resolve and disclose.
//!
//! ```text
//! Round::new ──► Committed ──resolve(user_move)──► Revealed
//!                   │   ▲
//!                   │   └── UnknownMove (re-prompt, phase unchanged)
//!                   └── abandon() (secret wiped, never disclosed)
//! ```
//!
//! A second `resolve` on a revealed round is rejected with
//! [`GameError::RoundAlreadyResolved`]; the first outcome stays readable
//! through [`Round::outcome`] and [`Round::disclosure`].

use super::messages::{CommitMessage, RevealMessage};
use super::types::{Outcome, RoundId};
use crate::crypto::{commit, verify_commitment, Commitment, EntropySource, Secret};
use crate::error::GameError;
use crate::games::OutcomeEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Commitment published, waiting for the user's move
    Committed,
    /// Outcome computed, secret and house move disclosed
    Revealed,
}

#[derive(Clone, Copy, Debug)]
struct Resolution {
    user_index: usize,
    outcome: Outcome,
}

/// One game round owned by the orchestrator.
#[derive(Debug)]
pub struct Round {
    id: RoundId,
    engine: Arc<OutcomeEngine>,
    house_index: usize,
    secret: Secret,
    commitment: Commitment,
    resolution: Option<Resolution>,
}

impl Round {
    /// Draw the house move and secret, and compute the commitment.
    pub fn new<E: EntropySource + ?Sized>(
        engine: Arc<OutcomeEngine>,
        entropy: &mut E,
    ) -> Result<Self, GameError> {
        let house_index = entropy.pick_index(engine.moves().len())?;
        let (secret, commitment) = commit(entropy, &engine.moves().names()[house_index])?;
        let id = RoundId::new();

        debug!(round_id = %id, commitment = %commitment, "round committed");

        Ok(Self {
            id,
            engine,
            house_index,
            secret,
            commitment,
            resolution: None,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn phase(&self) -> RoundPhase {
        match self.resolution {
            None => RoundPhase::Committed,
            Some(_) => RoundPhase::Revealed,
        }
    }

    pub fn engine(&self) -> &OutcomeEngine {
        &self.engine
    }

    /// Safe to publish in any phase; never changes after `new`
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn commit_message(&self) -> CommitMessage {
        CommitMessage {
            round_id: self.id,
            commitment: self.commitment,
        }
    }

    /// Outcome of a revealed round
    pub fn outcome(&self) -> Option<Outcome> {
        self.resolution.map(|r| r.outcome)
    }

    /// Accept the user's single move, compute the outcome, and disclose.
    pub fn resolve(&mut self, user_move: &str) -> Result<Disclosure, GameError> {
        if self.resolution.is_some() {
            warn!(round_id = %self.id, "rejected second move for resolved round");
            return Err(GameError::RoundAlreadyResolved);
        }

        let user_index = self.engine.moves().find(user_move)?.index();
        let outcome = self.engine.classify_index(self.house_index, user_index);
        let resolution = Resolution {
            user_index,
            outcome,
        };
        self.resolution = Some(resolution);

        info!(round_id = %self.id, outcome = %outcome, "round resolved");

        Ok(self.disclose(resolution))
    }

    /// Disclosure of a revealed round, `None` while still committed
    pub fn disclosure(&self) -> Option<Disclosure> {
        self.resolution.map(|r| self.disclose(r))
    }

    /// Drop the round before the user moved. The secret is wiped, not disclosed.
    pub fn abandon(self) {
        debug!(round_id = %self.id, phase = ?self.phase(), "round abandoned");
    }

    fn disclose(&self, resolution: Resolution) -> Disclosure {
        let names = self.engine.moves().names();
        Disclosure {
            round_id: self.id,
            outcome: resolution.outcome,
            user_move: names[resolution.user_index].clone(),
            house_move: names[self.house_index].clone(),
            secret: self.secret.clone(),
            commitment: self.commitment,
        }
    }
}

/// Everything the house reveals once the user's move is in
#[derive(Clone, Debug)]
pub struct Disclosure {
    pub round_id: RoundId,
    pub outcome: Outcome,
    pub user_move: String,
    pub house_move: String,
    pub secret: Secret,
    pub commitment: Commitment,
}

impl Disclosure {
    /// Check that the disclosed secret and house move reproduce the
    /// commitment published before the user moved.
    pub fn verify(&self) -> Result<(), GameError> {
        if verify_commitment(&self.secret, &self.house_move, &self.commitment) {
            Ok(())
        } else {
            warn!(round_id = %self.round_id, "disclosed move does not match commitment");
            Err(GameError::CommitmentVerificationFailed)
        }
    }

    pub fn reveal_message(&self) -> RevealMessage {
        RevealMessage {
            round_id: self.round_id,
            house_move: self.house_move.clone(),
            user_move: self.user_move.clone(),
            secret: self.secret.clone(),
            outcome: self.outcome,
        }
    }
}
