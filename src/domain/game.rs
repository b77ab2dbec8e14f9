use chrono::{DateTime, Utc};
use log::debug;
use std::rc::Rc;

use super::account::Account;
use super::outcome::OutcomePolicy;
use super::types::{AccountId, GameId, GameResult, GameVariant, Participants, Side};
use crate::errors::{LedgerError, LedgerResult};

/// A completed game, shared by both participants' histories
pub type SharedGame = Rc<Game>;

/// A single match between two accounts.
///
/// Games are created through `GameFactory`, which owns the id sequence. An
/// owned `Game` can still be bound and decided; once completed it is wrapped
/// in a `SharedGame` and can no longer change.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    name: String,
    participants: Option<Participants>,
    stake: u32,
    variant: GameVariant,
    result: GameResult,
    decided_at: Option<DateTime<Utc>>,
}

impl Game {
    pub(crate) fn unbound(id: GameId, name: String, variant: GameVariant) -> Self {
        Self {
            id,
            name,
            participants: None,
            stake: 0,
            variant,
            result: GameResult::Undetermined,
            decided_at: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stake(&self) -> u32 {
        self.stake
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decided_at
    }

    pub fn participants(&self) -> Option<&Participants> {
        self.participants.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.participants.is_some()
    }

    pub fn side_of(&self, account: &AccountId) -> Option<Side> {
        self.participants.as_ref()?.side_of(account)
    }

    pub fn opponent_of(&self, side: Side) -> Option<&AccountId> {
        self.participants
            .as_ref()
            .map(|p| p.get(side.opposite()))
    }

    /// Attach participants and stake to a factory-form game.
    ///
    /// Participants can only be set once; the stake is forced to zero for
    /// `NoStake` games.
    pub fn bind(&mut self, first: &Account, second: &Account, stake: u32) -> LedgerResult<()> {
        if self.is_bound() {
            return Err(LedgerError::ParticipantsAlreadyBound { game: self.id });
        }
        if first.id() == second.id() {
            return Err(LedgerError::SelfPlay {
                account: first.id().clone(),
            });
        }

        self.participants = Some(Participants {
            first: first.id().clone(),
            second: second.id().clone(),
        });
        self.stake = self.variant.effective_stake(stake);
        Ok(())
    }

    /// Set the result once, from the first participant's perspective
    pub fn decide(&mut self, result: GameResult) -> LedgerResult<()> {
        if self.result.is_decided() {
            return Err(LedgerError::ResultAlreadyDecided { game: self.id });
        }
        if !result.is_decided() {
            return Err(LedgerError::UndeterminedResult { game: self.id });
        }

        self.result = result;
        self.decided_at = Some(Utc::now());
        debug!("Game {} ({}) decided: {}", self.id, self.name, result.as_str());
        Ok(())
    }

    /// Reserved for an interactive mode; results only come from `simulate_play`.
    pub fn play(&self) -> LedgerResult<()> {
        Err(LedgerError::InteractivePlayUnavailable { game: self.id })
    }

    /// Draw a result from `policy` and settle it into both accounts.
    ///
    /// `first` and `second` may be passed in either order, but must be the
    /// two bound participants.
    pub fn simulate_play(
        mut self,
        first: &mut Account,
        second: &mut Account,
        policy: &mut impl OutcomePolicy,
    ) -> LedgerResult<SharedGame> {
        self.ensure_pair(first.id(), second.id())?;
        self.decide(policy.decide())?;

        let game = Rc::new(self);
        first.complete_game(second, &game)?;
        Ok(game)
    }

    /// Factory-form variant of `simulate_play`: binds participants and
    /// stake at call time before simulating.
    pub fn simulate_play_with(
        mut self,
        first: &mut Account,
        second: &mut Account,
        stake: u32,
        policy: &mut impl OutcomePolicy,
    ) -> LedgerResult<SharedGame> {
        self.bind(first, second, stake)?;
        self.simulate_play(first, second, policy)
    }

    fn ensure_pair(&self, a: &AccountId, b: &AccountId) -> LedgerResult<()> {
        let participants = self
            .participants
            .as_ref()
            .ok_or(LedgerError::UnboundParticipants { game: self.id })?;

        let side_a = participants
            .side_of(a)
            .ok_or_else(|| self.mismatch(a))?;
        if participants.get(side_a.opposite()) != b {
            return Err(self.mismatch(b));
        }
        Ok(())
    }

    pub(crate) fn mismatch(&self, account: &AccountId) -> LedgerError {
        LedgerError::ParticipantMismatch {
            account: account.clone(),
            game: self.id,
        }
    }
}
