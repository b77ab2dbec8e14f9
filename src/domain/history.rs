use chrono::{DateTime, Utc};
use serde::Serialize;

use super::game::Game;
use super::types::{AccountId, GameId, GameResult, GameVariant, Side};
use crate::rating::{AccountTier, RatingValue};

/// One completed game as seen by one of its participants
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry<'a> {
    game: &'a Game,
    side: Side,
    opponent: &'a AccountId,
}

impl<'a> HistoryEntry<'a> {
    pub(crate) fn new(game: &'a Game, viewer: &AccountId) -> Option<Self> {
        let side = game.side_of(viewer)?;
        let opponent = game.opponent_of(side)?;
        Some(Self {
            game,
            side,
            opponent,
        })
    }

    pub fn game(&self) -> &'a Game {
        self.game
    }

    pub fn game_id(&self) -> GameId {
        self.game.id()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn opponent(&self) -> &'a AccountId {
        self.opponent
    }

    /// The result as stored, relative to the first participant
    pub fn stored_result(&self) -> GameResult {
        self.game.result()
    }

    /// The result relative to the viewing account
    pub fn perspective_result(&self) -> GameResult {
        match self.side {
            Side::First => self.game.result(),
            Side::Second => self.game.result().inverse(),
        }
    }

    pub fn to_row(&self) -> HistoryRow {
        HistoryRow {
            game_id: self.game.id().value(),
            name: self.game.name().to_string(),
            variant: self.game.variant(),
            stake: self.game.stake(),
            side: self.side,
            opponent: self.opponent.to_string(),
            result: self.perspective_result(),
            decided_at: self.game.decided_at(),
        }
    }
}

/// Owned, serializable form of a `HistoryEntry`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub game_id: u64,
    pub name: String,
    pub variant: GameVariant,
    pub stake: u32,
    pub side: Side,
    pub opponent: String,
    pub result: GameResult, // viewer-relative
    pub decided_at: Option<DateTime<Utc>>,
}

/// Read-only snapshot of an account, consumed by the report renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountStats {
    pub name: String,
    pub tier: AccountTier,
    pub multiplier: u32,
    pub rating: RatingValue,
    pub games_count: usize,
    pub history: Vec<HistoryRow>,
}
