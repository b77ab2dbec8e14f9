use log::{debug, warn};
use std::rc::Rc;

use super::game::{Game, SharedGame};
use super::history::{AccountStats, HistoryEntry};
use super::types::{AccountId, GameId, Side};
use crate::errors::{LedgerError, LedgerResult};
use crate::rating::{self, AccountTier, DEFAULT_MULTIPLIER, RatingValue};

/// What `record_game` did with a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded {
        old_rating: RatingValue,
        new_rating: RatingValue,
    },
    AlreadyRecorded,
}

/// A rated participant. Owned by the caller; the ledger only mutates it
/// through `complete_game` / `record_game`.
#[derive(Debug)]
pub struct Account {
    name: AccountId,
    tier: AccountTier,
    multiplier: u32,
    rating: RatingValue,
    history: Vec<SharedGame>,
}

impl Account {
    pub fn new(name: impl Into<AccountId>, tier: AccountTier, rating: RatingValue) -> Self {
        Self {
            name: name.into(),
            tier,
            multiplier: DEFAULT_MULTIPLIER,
            rating,
            history: Vec::new(),
        }
    }

    pub fn with_multiplier(
        name: impl Into<AccountId>,
        tier: AccountTier,
        rating: RatingValue,
        multiplier: u32,
    ) -> LedgerResult<Self> {
        if multiplier == 0 {
            return Err(LedgerError::InvalidMultiplier { multiplier });
        }

        let mut account = Self::new(name, tier, rating);
        account.multiplier = multiplier;
        Ok(account)
    }

    pub fn id(&self) -> &AccountId {
        &self.name
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn tier(&self) -> AccountTier {
        self.tier
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn rating(&self) -> RatingValue {
        self.rating
    }

    pub fn games_count(&self) -> usize {
        self.history.len()
    }

    pub fn has_recorded(&self, game: GameId) -> bool {
        self.history.iter().any(|g| g.id() == game)
    }

    /// Whether this exact game is in history. A different game carrying the
    /// same id is a conflict, not a repeat.
    fn already_holds(&self, game: &SharedGame) -> LedgerResult<bool> {
        match self.history.iter().find(|g| g.id() == game.id()) {
            Some(held) if Rc::ptr_eq(held, game) => Ok(true),
            Some(_) => Err(LedgerError::ConflictingGame { game: game.id() }),
            None => Ok(false),
        }
    }

    /// Completed games in recording order, seen from this account's side
    pub fn history(&self) -> impl Iterator<Item = HistoryEntry<'_>> + '_ {
        self.history
            .iter()
            .filter_map(|game| HistoryEntry::new(game, &self.name))
    }

    pub fn stats(&self) -> AccountStats {
        AccountStats {
            name: self.name.to_string(),
            tier: self.tier,
            multiplier: self.multiplier,
            rating: self.rating,
            games_count: self.games_count(),
            history: self.history().map(|entry| entry.to_row()).collect(),
        }
    }

    /// Settle a decided game into this account and its opponent.
    ///
    /// Either participant may initiate. Every check happens before any
    /// mutation, so on error neither account changes.
    pub fn complete_game(&mut self, opponent: &mut Account, game: &SharedGame) -> LedgerResult<()> {
        let side = self.validate_completion(opponent, game).inspect_err(|e| {
            warn!("Rejected completion of game {} by {}: {}", game.id(), self.name, e);
        })?;

        debug!(
            "{} completes game {} as {:?} participant",
            self.name,
            game.id(),
            side
        );
        self.record_game(game)?;
        opponent.record_game(game)?;
        Ok(())
    }

    /// Apply a decided game to this account once.
    ///
    /// Recording the same game again is a no-op that reports
    /// `AlreadyRecorded`.
    pub fn record_game(&mut self, game: &SharedGame) -> LedgerResult<RecordOutcome> {
        if self.already_holds(game)? {
            return Ok(RecordOutcome::AlreadyRecorded);
        }

        let side = self.side_in(game)?;
        if !game.result().is_decided() {
            return Err(LedgerError::UndeterminedResult { game: game.id() });
        }

        let delta = rating::rating_delta(game.result(), game.variant(), game.stake(), side);
        let old_rating = self.rating;
        let new_rating = rating::adjust(self.tier, self.multiplier, old_rating, delta);

        self.rating = new_rating;
        self.history.push(Rc::clone(game));

        debug!(
            "{} recorded game {}: delta {}, rating {} -> {}",
            self.name,
            game.id(),
            delta,
            old_rating,
            new_rating
        );
        Ok(RecordOutcome::Recorded {
            old_rating,
            new_rating,
        })
    }

    fn validate_completion(&self, opponent: &Account, game: &SharedGame) -> LedgerResult<Side> {
        let participants = game
            .participants()
            .ok_or(LedgerError::UnboundParticipants { game: game.id() })?;

        let side = self.side_in(game)?;
        if participants.get(side.opposite()) != opponent.id() {
            return Err(game.mismatch(opponent.id()));
        }
        if !game.result().is_decided() {
            return Err(LedgerError::UndeterminedResult { game: game.id() });
        }
        self.already_holds(game)?;
        opponent.already_holds(game)?;

        Ok(side)
    }

    fn side_in(&self, game: &Game) -> LedgerResult<Side> {
        game.side_of(&self.name)
            .ok_or_else(|| game.mismatch(&self.name))
    }
}
