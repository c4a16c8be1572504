//! HMAC Game Core Library
//!
//! This crate provides the outcome rule, the commit-reveal primitives, and
//! the round protocol for a house-versus-user game over an odd-sized cyclic
//! move set (rock-paper-scissors and its generalizations).

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{commit, verify_commitment, Commitment, EntropySource, OsEntropy, Secret};
pub use error::GameError;
pub use games::{HelpTable, Move, MoveSet, OutcomeEngine};
pub use protocol::{
    CommitMessage, Disclosure, Outcome, RevealMessage, Role, Round, RoundId, RoundPhase,
};
