//! Cryptographic primitives for the HMAC game.
//!
//! This module provides:
//! - EntropySource and OsEntropy for unpredictable draws
//! - Secret and Commitment for the commit-reveal scheme

mod commitment;
mod entropy;

pub use commitment::{
    commit, verify_commitment, Commitment, Secret, COMMITMENT_LEN, SECRET_LEN,
};
pub use entropy::{EntropySource, OsEntropy};
