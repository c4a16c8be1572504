//! Secret and Commitment for the commit-reveal scheme.
//!
//! Commitment = HMAC-SHA256(key = secret, message = house move name)

use super::entropy::EntropySource;
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

pub const SECRET_LEN: usize = 32;
pub const COMMITMENT_LEN: usize = 32;

fn decode_32(hex_str: &str, what: &str) -> Result<[u8; 32], GameError> {
    let bytes = hex::decode(hex_str.trim())
        .map_err(|e| GameError::InvalidEncoding(format!("{}: {}", what, e)))?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        GameError::InvalidEncoding(format!("{}: expected 32 bytes, got {}", what, bytes.len()))
    })
}

/// HMAC key for one round. Wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Draw a fresh secret
    pub fn generate<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, GameError> {
        let mut bytes = [0u8; SECRET_LEN];
        entropy.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a disclosed secret (either hex case)
    pub fn from_hex(hex_str: &str) -> Result<Self, GameError> {
        decode_32(hex_str, "secret").map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    /// Uppercase hex, for disclosure after the round is resolved
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

// Never print secret material, not even a prefix
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<redacted>)")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Published binding of the house to its move
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    /// Compute HMAC-SHA256(secret, house_move)
    pub fn compute(secret: &Secret, house_move: &str) -> Result<Self, GameError> {
        let mac = keyed_digest(secret, house_move)?;
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Parse a published commitment (either hex case)
    pub fn from_hex(hex_str: &str) -> Result<Self, GameError> {
        decode_32(hex_str, "commitment").map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Verify that the given secret and move produce this commitment
    pub fn verify(&self, secret: &Secret, house_move: &str) -> bool {
        verify_commitment(secret, house_move, self)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode_upper(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

fn keyed_digest(secret: &Secret, house_move: &str) -> Result<HmacSha256, GameError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| GameError::DigestComputationFailed(e.to_string()))?;
    mac.update(house_move.as_bytes());
    Ok(mac)
}

/// Draw a fresh secret and commit to `house_move` with it.
///
/// The commitment may be published immediately; the secret must be withheld
/// until the user's move is in.
pub fn commit<E: EntropySource + ?Sized>(
    entropy: &mut E,
    house_move: &str,
) -> Result<(Secret, Commitment), GameError> {
    let secret = Secret::generate(entropy)?;
    let commitment = Commitment::compute(&secret, house_move)?;
    Ok((secret, commitment))
}

/// Recompute the commitment and compare in constant time
pub fn verify_commitment(secret: &Secret, house_move: &str, commitment: &Commitment) -> bool {
    match keyed_digest(secret, house_move) {
        Ok(mac) => mac.verify_slice(commitment.as_bytes()).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::OsEntropy;

    fn fixed_secret() -> Secret {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Secret::from_bytes(bytes)
    }

    #[test]
    fn test_known_hmac_vector() {
        let secret = fixed_secret();
        assert_eq!(
            Commitment::compute(&secret, "Rock").unwrap().to_hex(),
            "ACF30395D29454AD106C6291EA9760AB8BE3FF5089D87BA300D72D002821C246"
        );
        assert_eq!(
            Commitment::compute(&secret, "Paper").unwrap().to_hex(),
            "DAA52D50361F9A481A15843F3C08E69BB3D4C62A0A1DDBA253A015E4C9D3FE4B"
        );
    }

    #[test]
    fn test_commitment_verification() {
        let (secret, commitment) = commit(&mut OsEntropy::new(), "Rock").unwrap();
        assert!(verify_commitment(&secret, "Rock", &commitment));
        assert!(commitment.verify(&secret, "Rock"));
    }

    #[test]
    fn test_deterministic() {
        let secret = fixed_secret();
        let c1 = Commitment::compute(&secret, "Lizard").unwrap();
        let c2 = Commitment::compute(&secret, "Lizard").unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let (secret, commitment) = commit(&mut OsEntropy::new(), "Rock").unwrap();
        assert!(!verify_commitment(&secret, "Paper", &commitment));
        assert!(!verify_commitment(&secret, "rock", &commitment));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let (_, commitment) = commit(&mut OsEntropy::new(), "Rock").unwrap();
        let other = Secret::generate(&mut OsEntropy::new()).unwrap();
        assert!(!verify_commitment(&other, "Rock", &commitment));
    }

    #[test]
    fn test_different_secrets_different_commitments() {
        let (_, c1) = commit(&mut OsEntropy::new(), "Rock").unwrap();
        let (_, c2) = commit(&mut OsEntropy::new(), "Rock").unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_hex_round_trip_accepts_lowercase() {
        let secret = fixed_secret();
        let commitment = Commitment::compute(&secret, "Rock").unwrap();

        let parsed_secret = Secret::from_hex(&secret.to_hex().to_lowercase()).unwrap();
        let parsed_commitment = Commitment::from_hex(&commitment.to_hex().to_lowercase()).unwrap();

        assert_eq!(parsed_secret.as_bytes(), secret.as_bytes());
        assert_eq!(parsed_commitment, commitment);
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert!(matches!(
            Secret::from_hex("zz").unwrap_err(),
            GameError::InvalidEncoding(_)
        ));
        assert!(matches!(
            Commitment::from_hex("ABCD").unwrap_err(),
            GameError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = fixed_secret();
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "Secret(<redacted>)");
        assert!(!debug.contains("0001"));
    }

    #[test]
    fn test_commitment_display_is_uppercase_hex() {
        let commitment = Commitment::compute(&fixed_secret(), "Rock").unwrap();
        let shown = commitment.to_string();
        assert_eq!(shown.len(), 64);
        assert_eq!(shown, shown.to_uppercase());
    }

    #[test]
    fn test_serde_as_hex() {
        let secret = fixed_secret();
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(
            json,
            "\"000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F\""
        );
        let back: Secret = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_bytes(), secret.as_bytes());
    }
}
