use hmac_game_core::GameError;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status: 2 for bad configuration, 1 for everything else
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Game(GameError::InvalidMoveSet(_)) => 2,
            _ => 1,
        }
    }
}
