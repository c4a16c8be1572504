//! Move set and move handles.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Ordered list of distinct move names with odd cardinality >= 3.
///
/// Position in the list defines the cycle the outcome rule walks, so
/// `[Rock, Paper, Scissors]` and `[Rock, Scissors, Paper]` are different games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Smallest playable move set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < Self::MIN_MOVES {
            return Err(GameError::InvalidMoveSet(format!(
                "need at least {} moves, got {}",
                Self::MIN_MOVES,
                names.len()
            )));
        }
        if names.len() % 2 == 0 {
            return Err(GameError::InvalidMoveSet(format!(
                "number of moves must be odd, got {}",
                names.len()
            )));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::InvalidMoveSet(format!(
                    "duplicate move name: {}",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set, provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Move at a zero-based position
    pub fn get(&self, index: usize) -> Option<Move<'_>> {
        self.names.get(index).map(|name| Move { index, name })
    }

    /// Look up a move by exact (case-sensitive) name
    pub fn find(&self, name: &str) -> Result<Move<'_>, GameError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| Move {
                index,
                name: &self.names[index],
            })
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Move<'_>> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| Move { index, name })
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(set: MoveSet) -> Self {
        set.names
    }
}

/// A move inside a [`MoveSet`]. Equality compares positions only.
#[derive(Clone, Copy, Debug)]
pub struct Move<'a> {
    index: usize,
    name: &'a str,
}

impl<'a> Move<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'a str {
        self.name
    }
}

impl PartialEq for Move<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Move<'_> {}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_valid_move_set() {
        let set = rps();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.names(), &["Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_rejects_even_count() {
        let err = MoveSet::new(["A", "B", "C", "D"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));
    }

    #[test]
    fn test_rejects_too_few() {
        assert!(matches!(
            MoveSet::new(["A"]).unwrap_err(),
            GameError::InvalidMoveSet(_)
        ));
        assert!(matches!(
            MoveSet::new(Vec::<String>::new()).unwrap_err(),
            GameError::InvalidMoveSet(_)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MoveSet::new(["Rock", "Paper", "Rock"]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMoveSet("duplicate move name: Rock".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(MoveSet::new(["rock", "Rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_find_and_get() {
        let set = rps();
        let paper = set.find("Paper").unwrap();
        assert_eq!(paper.index(), 1);
        assert_eq!(paper.name(), "Paper");
        assert_eq!(set.get(1), Some(paper));
        assert!(set.get(3).is_none());
        assert_eq!(
            set.find("paper").unwrap_err(),
            GameError::UnknownMove("paper".to_string())
        );
    }

    #[test]
    fn test_iter_in_order() {
        let set = rps();
        let indices: Vec<usize> = set.iter().map(|m| m.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_deserialize_validates() {
        let set: MoveSet = serde_json::from_str(r#"["Rock","Paper","Scissors"]"#).unwrap();
        assert_eq!(set, rps());

        assert!(serde_json::from_str::<MoveSet>(r#"["Rock","Paper"]"#).is_err());
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["Rock","Paper","Scissors"]"#
        );
    }
}
