//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique round identifier, used to correlate log lines and wire messages
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Party in a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    House,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::House => write!(f, "House"),
            Role::User => write!(f, "User"),
        }
    }
}

/// Round outcome. The house move is always the first operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HouseWins,
    UserWins,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::HouseWins => "House wins",
            Outcome::UserWins => "User wins",
            Outcome::Draw => "Draw",
        }
    }

    /// The winning party, if any
    pub fn winner(&self) -> Option<Role> {
        match self {
            Outcome::HouseWins => Some(Role::House),
            Outcome::UserWins => Some(Role::User),
            Outcome::Draw => None,
        }
    }

    /// Same result with the operands swapped
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::HouseWins => Outcome::UserWins,
            Outcome::UserWins => Outcome::HouseWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Result from the first operand's point of view ("Win", "Lose", "Draw")
    pub fn for_first(&self) -> &'static str {
        match self {
            Outcome::HouseWins => "Win",
            Outcome::UserWins => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_id_parse() {
        let id = RoundId::new();
        let parsed: RoundId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<RoundId>().is_err());
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::HouseWins.winner(), Some(Role::House));
        assert_eq!(Outcome::UserWins.winner(), Some(Role::User));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_outcome_flip() {
        assert_eq!(Outcome::HouseWins.flip(), Outcome::UserWins);
        assert_eq!(Outcome::UserWins.flip(), Outcome::HouseWins);
        assert_eq!(Outcome::Draw.flip(), Outcome::Draw);
    }

    #[test]
    fn test_outcome_str() {
        assert_eq!(Outcome::HouseWins.as_str(), "House wins");
        assert_eq!(Outcome::UserWins.for_first(), "Lose");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
