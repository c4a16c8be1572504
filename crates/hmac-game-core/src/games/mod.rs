//! Move sets and the outcome rule.

mod moves;
mod rules;
mod table;

pub use moves::{Move, MoveSet};
pub use rules::OutcomeEngine;
pub use table::HelpTable;
