use thiserror::Error;

use crate::domain::{AccountId, GameId};

/// Misuse of the ledger core. Ratings are clamped rather than failing, so
/// nothing here is about arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {account} is not a participant of game {game}")]
    ParticipantMismatch { account: AccountId, game: GameId },
    #[error("result of game {game} has already been decided")]
    ResultAlreadyDecided { game: GameId },
    #[error("game {game} has no decided result and cannot be completed")]
    UndeterminedResult { game: GameId },
    #[error("game {game} has no participants bound")]
    UnboundParticipants { game: GameId },
    #[error("participants of game {game} are already bound")]
    ParticipantsAlreadyBound { game: GameId },
    #[error("account {account} cannot play against itself")]
    SelfPlay { account: AccountId },
    #[error("rating multiplier must be positive (got {multiplier})")]
    InvalidMultiplier { multiplier: u32 },
    #[error("a different game with id {game} is already recorded")]
    ConflictingGame { game: GameId },
    #[error("game id sequence is exhausted")]
    IdSequenceExhausted,
    #[error("interactive play is not available for game {game}")]
    InteractivePlayUnavailable { game: GameId },
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Add context to a failed game simulation
pub fn simulation_context(game_name: &str) -> String {
    format!("Failed to simulate game: {}", game_name)
}

/// Add context to a failed roster setup
pub fn roster_context(account_name: &str) -> String {
    format!("Failed to create account: {}", account_name)
}

/// Add context to report rendering errors
pub fn report_context(format: &str) -> String {
    format!("Failed to render {} report", format)
}
