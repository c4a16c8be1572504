//! HMAC Game
//!
//! Interactive rock-paper-scissors with any odd number of moves. The computer
//! commits to its move by printing an HMAC before you choose, then reveals the
//! HMAC key so you can check it did not change its move.
//!
//! # Usage
//!
//! ```bash
//! # Play (repeats until you enter 0)
//! hmac-game Rock Spock Paper Lizard Scissors
//!
//! # Print the rules table
//! hmac-game table Rock Paper Scissors
//!
//! # Audit a finished round
//! hmac-game verify --key <KEY> --move Rock --hmac <HMAC>
//! ```

mod cli;
mod error;
mod session;

use clap::Parser;
use cli::{Args, Command};
use error::CliError;
use hmac_game_core::{GameError, HelpTable, OsEntropy, OutcomeEngine};
use session::{verify_disclosure, Session};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the game
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Game(GameError::InvalidMoveSet(_)) = e {
                eprintln!("Example: hmac-game Rock Spock Paper Lizard Scissors");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Some(Command::Table { moves }) => {
            let engine = OutcomeEngine::new(moves)?;
            println!("{}", HelpTable::new(&engine));
            Ok(())
        }
        Some(Command::Verify {
            key,
            house_move,
            hmac,
        }) => {
            verify_disclosure(&key, &house_move, &hmac)?;
            println!("OK: key and move {} reproduce the HMAC", house_move);
            Ok(())
        }
        None => {
            let engine = Arc::new(OutcomeEngine::new(args.moves)?);
            info!(moves = engine.moves().len(), "starting session");

            let stdin = io::stdin();
            let stdout = io::stdout();
            let summary = Session::new(engine, stdin.lock(), stdout.lock())
                .once(args.once)
                .run(&mut OsEntropy::new())?;

            info!(rounds = summary.rounds, "session finished");
            Ok(())
        }
    }
}
