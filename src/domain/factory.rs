use log::debug;

use super::account::Account;
use super::game::Game;
use super::types::{GameId, GameVariant};
use crate::errors::{LedgerError, LedgerResult};

/// Sole constructor of games; owns the id sequence.
///
/// The sequence starts at 0 and only ever moves forward for the lifetime of
/// the factory. Use one factory per simulation so ids stay unique. Once
/// `u64::MAX` has been handed out the sequence is exhausted and creation fails.
#[derive(Debug)]
pub struct GameFactory {
    next_id: Option<u64>,
}

impl Default for GameFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameFactory {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(next_id: u64) -> Self {
        Self {
            next_id: Some(next_id),
        }
    }

    /// Id the next created game will receive, `None` once exhausted
    pub fn peek_next_id(&self) -> Option<GameId> {
        self.next_id.map(GameId::new)
    }

    /// Full form: both participants known up front
    pub fn create(
        &mut self,
        first: &Account,
        second: &Account,
        stake: u32,
        name: impl Into<String>,
        variant: GameVariant,
    ) -> LedgerResult<Game> {
        if first.id() == second.id() {
            return Err(LedgerError::SelfPlay {
                account: first.id().clone(),
            });
        }

        let mut game = self.create_unbound(name, variant)?;
        game.bind(first, second, stake)?;
        Ok(game)
    }

    /// Factory form: participants and stake are bound later
    pub fn create_unbound(
        &mut self,
        name: impl Into<String>,
        variant: GameVariant,
    ) -> LedgerResult<Game> {
        let id = self.allocate_id()?;
        let game = Game::unbound(id, name.into(), variant);
        debug!("Created game {} ({}, {})", id, game.name(), variant.as_str());
        Ok(game)
    }

    fn allocate_id(&mut self) -> LedgerResult<GameId> {
        let value = self.next_id.ok_or(LedgerError::IdSequenceExhausted)?;
        self.next_id = value.checked_add(1);
        Ok(GameId::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::AccountTier;

    #[test]
    fn test_ids_distinct_and_increasing() {
        let alice = Account::new("alice", AccountTier::Standard, 10);
        let bob = Account::new("bob", AccountTier::Standard, 10);
        let mut factory = GameFactory::new();

        let mut ids = Vec::new();
        for i in 0..12 {
            let variant = GameVariant::ALL[i % 3];
            let game = if i % 2 == 0 {
                factory.create(&alice, &bob, 5, "paired", variant).unwrap()
            } else {
                factory.create_unbound("open", variant).unwrap()
            };
            ids.push(game.id());
        }

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.first().map(|id| id.value()), Some(0));
        assert_eq!(ids.last().map(|id| id.value()), Some(11));
    }

    #[test]
    fn test_injected_start() {
        let mut factory = GameFactory::starting_at(100);
        assert_eq!(factory.peek_next_id().map(|id| id.value()), Some(100));

        let game = factory.create_unbound("late", GameVariant::Symmetric).unwrap();
        assert_eq!(game.id().value(), 100);
        assert_eq!(factory.peek_next_id().map(|id| id.value()), Some(101));
    }

    #[test]
    fn test_sequence_exhausts_at_max_id() {
        let alice = Account::new("alice", AccountTier::Standard, 10);
        let bob = Account::new("bob", AccountTier::Standard, 10);
        let mut factory = GameFactory::starting_at(u64::MAX);

        let last = factory.create(&alice, &bob, 5, "last", GameVariant::Symmetric).unwrap();
        assert_eq!(last.id().value(), u64::MAX);
        assert_eq!(factory.peek_next_id(), None);

        let err = factory.create_unbound("overflow", GameVariant::Symmetric).unwrap_err();
        assert_eq!(err, LedgerError::IdSequenceExhausted);
        let err = factory
            .create(&alice, &bob, 5, "overflow", GameVariant::Symmetric)
            .unwrap_err();
        assert_eq!(err, LedgerError::IdSequenceExhausted);
    }

    #[test]
    fn test_self_play_does_not_consume_an_id() {
        let alice = Account::new("alice", AccountTier::Standard, 10);
        let mut factory = GameFactory::new();

        let err = factory
            .create(&alice, &alice, 5, "mirror", GameVariant::Symmetric)
            .unwrap_err();

        assert_eq!(err, LedgerError::SelfPlay { account: "alice".into() });
        assert_eq!(factory.peek_next_id().map(|id| id.value()), Some(0));
    }

    #[test]
    fn test_no_stake_games_carry_zero_stake() {
        let alice = Account::new("alice", AccountTier::Standard, 10);
        let bob = Account::new("bob", AccountTier::Standard, 10);
        let mut factory = GameFactory::new();

        let game = factory
            .create(&alice, &bob, 50, "training", GameVariant::NoStake)
            .unwrap();
        assert_eq!(game.stake(), 0);
    }
}
