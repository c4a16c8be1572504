//! Interactive play loop.
//!
//! Each round: print the HMAC, show the menu, read one choice, then print
//! both moves, the result, and the HMAC key so the user can check the HMAC.

use crate::error::CliError;
use hmac_game_core::{
    verify_commitment, Commitment, Disclosure, EntropySource, GameError, HelpTable, Outcome,
    OutcomeEngine, Round, Secret,
};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, error};

/// A line of user input, decoded against the move list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Exit,
    Help,
    Move(String),
}

impl Choice {
    /// `0`, `?`, a 1-based menu number, or a move name.
    ///
    /// Menu keys take precedence over names; [`check_menu_names`] keeps the
    /// two from overlapping.
    pub fn parse(input: &str, engine: &OutcomeEngine) -> Option<Choice> {
        let input = input.trim();
        match input {
            "0" => return Some(Choice::Exit),
            "?" => return Some(Choice::Help),
            _ => {}
        }

        let moves = engine.moves();
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|i| moves.get(i))
                .map(|m| Choice::Move(m.name().to_string()));
        }

        moves
            .find(input)
            .ok()
            .map(|m| Choice::Move(m.name().to_string()))
    }
}

/// Reject move names the menu would read as `0`, `?`, or a number
pub fn check_menu_names(engine: &OutcomeEngine) -> Result<(), GameError> {
    match engine
        .moves()
        .names()
        .iter()
        .find(|n| n.trim() == "?" || n.trim().parse::<usize>().is_ok())
    {
        Some(name) => Err(GameError::InvalidMoveSet(format!(
            "move name {:?} clashes with a menu key",
            name
        ))),
        None => Ok(()),
    }
}

/// Check a disclosure against the HMAC that was shown before the move
pub fn audit(published: &Commitment, disclosure: &Disclosure) -> Result<(), GameError> {
    if verify_commitment(&disclosure.secret, &disclosure.house_move, published) {
        Ok(())
    } else {
        Err(GameError::CommitmentVerificationFailed)
    }
}

/// Tally over the whole session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub user_wins: usize,
    pub house_wins: usize,
    pub draws: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::UserWins => self.user_wins += 1,
            Outcome::HouseWins => self.house_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

enum RoundEnd {
    Played,
    Quit,
}

pub struct Session<R, W> {
    engine: Arc<OutcomeEngine>,
    input: R,
    output: W,
    once: bool,
    summary: Summary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: Arc<OutcomeEngine>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            once: false,
            summary: Summary::default(),
        }
    }

    /// Stop after the first resolved round
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Play rounds until the user exits or input ends
    pub fn run<E: EntropySource + ?Sized>(&mut self, entropy: &mut E) -> Result<Summary, CliError> {
        check_menu_names(&self.engine)?;

        loop {
            let round = Round::new(self.engine.clone(), entropy)?;
            match self.play_round(round)? {
                RoundEnd::Quit => break,
                RoundEnd::Played if self.once => break,
                RoundEnd::Played => {}
            }
        }

        if self.summary.rounds > 0 {
            writeln!(
                self.output,
                "Rounds played: {} (won {}, lost {}, drawn {})",
                self.summary.rounds,
                self.summary.user_wins,
                self.summary.house_wins,
                self.summary.draws
            )?;
        }
        Ok(self.summary)
    }

    fn play_round(&mut self, mut round: Round) -> Result<RoundEnd, CliError> {
        let published = *round.commitment();
        writeln!(self.output, "HMAC: {}", published)?;

        loop {
            self.show_menu()?;
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                round.abandon();
                return Ok(RoundEnd::Quit);
            }

            let choice = match Choice::parse(&line, &self.engine) {
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            let user_move = match choice {
                Choice::Exit => {
                    round.abandon();
                    return Ok(RoundEnd::Quit);
                }
                Choice::Help => {
                    writeln!(self.output, "{}", HelpTable::new(&self.engine))?;
                    continue;
                }
                Choice::Move(name) => name,
            };

            let disclosure = match round.resolve(&user_move) {
                Ok(disclosure) => disclosure,
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output, "{}. Please try again.", e)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            writeln!(self.output, "Your move: {}", disclosure.user_move)?;
            writeln!(self.output, "Computer move: {}", disclosure.house_move)?;
            writeln!(
                self.output,
                "{}",
                match disclosure.outcome {
                    Outcome::UserWins => "You win!",
                    Outcome::HouseWins => "You lose!",
                    Outcome::Draw => "It's a draw!",
                }
            )?;
            writeln!(self.output, "HMAC key: {}", disclosure.secret.to_hex())?;

            if let Err(e) = audit(&published, &disclosure) {
                error!(round_id = %disclosure.round_id, "integrity check failed");
                writeln!(
                    self.output,
                    "INTEGRITY FAILURE: the disclosed key and move do not match the HMAC"
                )?;
                return Err(e.into());
            }

            self.summary.record(disclosure.outcome);
            return Ok(RoundEnd::Played);
        }
    }

    fn show_menu(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Available moves:")?;
        for mv in self.engine.moves().iter() {
            writeln!(self.output, "{} - {}", mv.index() + 1, mv.name())?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        Ok(())
    }
}

/// Result of the `verify` subcommand
pub fn verify_disclosure(key: &str, house_move: &str, hmac: &str) -> Result<(), GameError> {
    let secret = Secret::from_hex(key)?;
    let commitment = Commitment::from_hex(hmac)?;
    if commitment.verify(&secret, house_move) {
        Ok(())
    } else {
        Err(GameError::CommitmentVerificationFailed)
    }
}
