use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::roster::Roster;
use crate::config::settings::AppConfig;
use crate::domain::{GameFactory, GameVariant, OutcomePolicy, RandomOutcome};
use crate::errors::simulation_context;

/// Plays randomly decided games between random pairs of a roster
pub struct SimulationService<P: OutcomePolicy> {
    config: AppConfig,
    factory: GameFactory,
    roster: Roster,
    policy: P,
    pairing: StdRng,
}

impl SimulationService<RandomOutcome<StdRng>> {
    pub fn new(config: AppConfig, roster: Roster, seed: Option<u64>) -> Self {
        let (policy, pairing) = match seed {
            Some(seed) => (
                RandomOutcome::seeded(seed, &config.simulation),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (
                RandomOutcome::from_entropy(&config.simulation),
                StdRng::from_entropy(),
            ),
        };

        Self::with_policy(config, roster, policy, pairing)
    }
}

impl<P: OutcomePolicy> SimulationService<P> {
    pub fn with_policy(config: AppConfig, roster: Roster, policy: P, pairing: StdRng) -> Self {
        Self {
            config,
            factory: GameFactory::new(),
            roster,
            policy,
            pairing,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn run(&mut self) -> Result<()> {
        let games = self.config.simulation.games_per_run;
        if self.roster.is_empty() {
            anyhow::bail!("No accounts to simulate");
        }
        if self.roster.len() < 2 {
            anyhow::bail!("At least two accounts are needed to simulate games");
        }

        info!("=== Starting Simulation ===");
        info!(
            "  → {} accounts, {} games, stake {}",
            self.roster.len(),
            games,
            self.config.ledger.default_stake
        );

        for round in 0..games {
            self.play_round(round)?;
            log_progress(round + 1, games);
        }

        info!("=== Simulation Complete ===");
        Ok(())
    }

    fn play_round(&mut self, round: usize) -> Result<()> {
        let variant = variant_for_round(round);
        let name = format!("{} #{}", variant.as_str(), round + 1);
        let (i, j) = self.pick_pair();
        let stake = self.config.ledger.default_stake;

        let (first, second) = self
            .roster
            .pair_mut(i, j)
            .context("Failed to borrow a pair of accounts")?;

        let game = self
            .factory
            .create(first, second, stake, name.as_str(), variant)
            .with_context(|| simulation_context(&name))?;
        game.simulate_play(first, second, &mut self.policy)
            .with_context(|| simulation_context(&name))?;

        Ok(())
    }

    fn pick_pair(&mut self) -> (usize, usize) {
        let n = self.roster.len();
        let first = self.pairing.gen_range(0..n);
        let mut second = self.pairing.gen_range(0..n - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}

fn variant_for_round(round: usize) -> GameVariant {
    GameVariant::ALL[round % GameVariant::ALL.len()]
}

fn log_progress(current: usize, total: usize) {
    if current % 10 == 0 || current == total {
        info!("  → Progress: {}/{} games", current, total);
    }
}
