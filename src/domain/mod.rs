mod account;
mod factory;
mod game;
mod history;
mod outcome;
pub mod types;

pub use account::{Account, RecordOutcome};
pub use factory::GameFactory;
pub use game::{Game, SharedGame};
pub use history::{AccountStats, HistoryEntry, HistoryRow};
pub use outcome::{FixedOutcome, OutcomePolicy, RandomOutcome, ScriptedOutcome};
pub use types::*;
