//! Protocol types, messages, and the round lifecycle.

mod messages;
mod round;
mod types;

pub use messages::{CommitMessage, RevealMessage};
pub use round::{Disclosure, Round, RoundPhase};
pub use types::{Outcome, Role, RoundId};
