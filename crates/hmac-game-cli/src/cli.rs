//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Provably fair rock-paper-scissors with any odd number of moves
#[derive(Parser, Debug)]
#[command(name = "hmac-game")]
#[command(about = "Provably fair rock-paper-scissors with any odd number of moves")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Example: hmac-game Rock Spock Paper Lizard Scissors")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Moves to play with, in cycle order (odd count, at least 3, no duplicates)
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Play a single round and exit
    #[arg(long)]
    pub once: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, env = "HMAC_GAME_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print who beats whom for the given moves
    Table {
        #[arg(value_name = "MOVE", required = true)]
        moves: Vec<String>,
    },
    /// Check a disclosed key and move against the HMAC shown before the round
    Verify {
        /// Disclosed HMAC key (hex)
        #[arg(long)]
        key: String,
        /// Disclosed house move
        #[arg(long = "move")]
        house_move: String,
        /// HMAC published before the round (hex)
        #[arg(long)]
        hmac: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_moves_mean_play() {
        let args = Args::try_parse_from(["hmac-game", "Rock", "Paper", "Scissors"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.moves, vec!["Rock", "Paper", "Scissors"]);
        assert!(!args.once);
    }

    #[test]
    fn test_table_subcommand() {
        let args = Args::try_parse_from(["hmac-game", "table", "a", "b", "c"]).unwrap();
        match args.command {
            Some(Command::Table { moves }) => assert_eq!(moves, vec!["a", "b", "c"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verify_subcommand() {
        let args = Args::try_parse_from([
            "hmac-game",
            "verify",
            "--key",
            "00",
            "--move",
            "Rock",
            "--hmac",
            "11",
        ])
        .unwrap();
        match args.command {
            Some(Command::Verify {
                key,
                house_move,
                hmac,
            }) => {
                assert_eq!(key, "00");
                assert_eq!(house_move, "Rock");
                assert_eq!(hmac, "11");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
