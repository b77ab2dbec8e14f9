use anyhow::{Context, Result};
use log::info;

use crate::domain::{Account, AccountStats, FixedOutcome, GameFactory, GameResult, GameVariant};
use crate::errors::simulation_context;
use crate::rating::AccountTier;

/// Scripted sample run: one account per tier, one game per variant
pub struct DemoService {
    factory: GameFactory,
}

impl Default for DemoService {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoService {
    pub fn new() -> Self {
        Self {
            factory: GameFactory::new(),
        }
    }

    pub fn run(&mut self) -> Result<Vec<AccountStats>> {
        let mut anna = Account::new("anna", AccountTier::Standard, 5);
        let mut boris = Account::new("boris", AccountTier::Premium, 5);
        let mut cleo = Account::new("cleo", AccountTier::PremiumPlus, 10);

        info!("=== Starting Demo ===");

        let ranked = self
            .factory
            .create(&anna, &boris, 5, "ranked", GameVariant::Symmetric)?;
        ranked
            .simulate_play(&mut anna, &mut boris, &mut FixedOutcome(GameResult::Win))
            .with_context(|| simulation_context("ranked"))?;
        info!("  → ranked: anna {} / boris {}", anna.rating(), boris.rating());

        let training = self
            .factory
            .create(&cleo, &anna, 5, "training", GameVariant::NoStake)?;
        training
            .simulate_play(&mut cleo, &mut anna, &mut FixedOutcome(GameResult::Lose))
            .with_context(|| simulation_context("training"))?;
        info!("  → training: cleo {} / anna {}", cleo.rating(), anna.rating());

        let exhibition = self
            .factory
            .create_unbound("exhibition", GameVariant::OneSided)?;
        exhibition
            .simulate_play_with(&mut boris, &mut cleo, 4, &mut FixedOutcome(GameResult::Win))
            .with_context(|| simulation_context("exhibition"))?;
        info!("  → exhibition: boris {} / cleo {}", boris.rating(), cleo.rating());

        info!("=== Demo Complete ===");
        Ok(vec![anna.stats(), boris.stats(), cleo.stats()])
    }
}
