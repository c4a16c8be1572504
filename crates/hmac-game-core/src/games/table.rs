//! Plain-text help table derived from the outcome matrix.

use super::rules::OutcomeEngine;
use crate::protocol::Outcome;
use std::fmt;

/// Every move against every other move, from the row move's point of view.
pub struct HelpTable<'a> {
    names: &'a [String],
    matrix: Vec<Vec<Outcome>>,
}

impl<'a> HelpTable<'a> {
    pub fn new(engine: &'a OutcomeEngine) -> Self {
        Self {
            names: engine.moves().names(),
            matrix: engine.matrix(),
        }
    }

    fn column_width(&self) -> usize {
        let longest = self.names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        // "Lose" and "Draw" are the widest cell values
        longest.max(4)
    }

    fn separator(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        write!(f, "+")?;
        for _ in 0..=self.names.len() {
            write!(f, "{}+", "-".repeat(width + 2))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HelpTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.column_width();

        self.separator(f, width)?;
        write!(f, "| {:width$} |", "", width = width)?;
        for name in self.names {
            write!(f, " {:>width$} |", name, width = width)?;
        }
        writeln!(f)?;
        self.separator(f, width)?;

        for (name, row) in self.names.iter().zip(&self.matrix) {
            write!(f, "| {:>width$} |", name, width = width)?;
            for outcome in row {
                write!(f, " {:>width$} |", outcome.for_first(), width = width)?;
            }
            writeln!(f)?;
        }
        self.separator(f, width)?;

        write!(
            f,
            "Each cell shows the result for the row move played against the column move."
        )
    }
}
