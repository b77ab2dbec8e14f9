pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::demo::DemoService;
use crate::services::roster::{AccountSpec, Roster};
use crate::services::simulation::SimulationService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_simulate(
    games: Option<usize>,
    stake: Option<u32>,
    seed: Option<u64>,
    accounts: &[AccountSpec],
    json: bool,
) -> Result<()> {
    let mut config = AppConfig::new();
    if let Some(games) = games {
        config.simulation.games_per_run = games;
    }
    if let Some(stake) = stake {
        config.ledger.default_stake = stake;
    }

    let roster = if accounts.is_empty() {
        Roster::one_per_tier(&config.ledger)
    } else {
        Roster::from_specs(accounts, &config.ledger)?
    };

    let mut service = SimulationService::new(config, roster, seed);
    service.run()?;

    let report = report::render_all(&service.roster().stats(), json)?;
    println!("{}", report);
    Ok(())
}

pub fn handle_demo(json: bool) -> Result<()> {
    let mut service = DemoService::new();
    let stats = service.run()?;

    let report = report::render_all(&stats, json)?;
    println!("{}", report);
    Ok(())
}
