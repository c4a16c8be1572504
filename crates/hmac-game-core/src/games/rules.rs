//! Generalized rock-paper-scissors outcome rule.
//!
//! For a cyclic move list of odd length `N`, every move beats the `N / 2`
//! moves that precede it and loses to the `N / 2` moves that follow it.
//! With `[Rock, Paper, Scissors]` that is the classic game: Paper beats Rock,
//! Scissors beats Paper, Rock (wrapping around) beats Scissors.

use super::moves::MoveSet;
use crate::error::GameError;
use crate::protocol::Outcome;

/// Decides the winner of any pair of moves from a fixed move set.
#[derive(Clone, Debug)]
pub struct OutcomeEngine {
    moves: MoveSet,
    half: usize,
}

impl OutcomeEngine {
    /// Validate the move names and build the engine
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_move_set(MoveSet::new(names)?))
    }

    pub fn from_move_set(moves: MoveSet) -> Self {
        let half = moves.len() / 2;
        Self { moves, half }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.half
    }

    /// Classify `house_move` played against `user_move`
    pub fn classify(&self, house_move: &str, user_move: &str) -> Result<Outcome, GameError> {
        let house = self.moves.find(house_move)?;
        let user = self.moves.find(user_move)?;
        Ok(self.classify_index(house.index(), user.index()))
    }

    /// Both indices must be below `self.moves().len()`.
    pub(crate) fn classify_index(&self, first: usize, second: usize) -> Outcome {
        debug_assert!(first < self.moves.len() && second < self.moves.len());

        let n = self.moves.len() as isize;
        let d = (first as isize - second as isize).rem_euclid(n) as usize;

        if d == 0 {
            Outcome::Draw
        } else if d <= self.half {
            Outcome::HouseWins
        } else {
            Outcome::UserWins
        }
    }

    /// Full result table: `matrix[r][c]` is row move `r` played against column move `c`.
    pub fn matrix(&self) -> Vec<Vec<Outcome>> {
        let n = self.moves.len();
        (0..n)
            .map(|row| (0..n).map(|col| self.classify_index(row, col)).collect())
            .collect()
    }

    /// Names of the moves that `name` beats, in move-set order
    pub fn beaten_by(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let mv = self.moves.find(name)?;
        Ok(self
            .moves
            .iter()
            .filter(|other| self.classify_index(mv.index(), other.index()) == Outcome::HouseWins)
            .map(|other| other.name())
            .collect())
    }
}
