//! Secure randomness for secrets and house move selection.
//!
//! Both the secret and the house move are drawn through [`EntropySource`] so
//! that a single, swappable source decides everything the user must not be
//! able to predict. Production code uses [`OsEntropy`]; tests plug in seeded
//! or failing sources.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Rejection sampling gives up after this many biased draws in a row.
const MAX_REJECTIONS: usize = 64;

/// Source of cryptographically secure random bytes.
///
/// Implementations must report failure instead of falling back to a weaker
/// generator.
pub trait EntropySource {
    /// Fill `buf` entirely or fail with [`GameError::InsufficientEntropy`]
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), GameError>;

    fn next_u32(&mut self) -> Result<u32, GameError> {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Uniform index in `[0, n)` without modulo bias
    fn pick_index(&mut self, n: usize) -> Result<usize, GameError> {
        let bound = u32::try_from(n)
            .ok()
            .filter(|b| *b > 0)
            .ok_or_else(|| GameError::InvalidMoveSet(format!("cannot pick from {} moves", n)))?;

        // Values below `threshold` would over-represent the low indices
        let threshold = bound.wrapping_neg() % bound;
        for _ in 0..MAX_REJECTIONS {
            let r = self.next_u32()?;
            if r >= threshold {
                return Ok((r % bound) as usize);
            }
        }

        Err(GameError::InsufficientEntropy(
            "entropy source kept producing biased values".to_string(),
        ))
    }
}

/// Operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), GameError> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::error!(error = %e, "operating system entropy source failed");
            GameError::InsufficientEntropy(e.to_string())
        })
    }
}
