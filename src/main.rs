use anyhow::Result;

use game_rating_ledger::cli::Command;
use game_rating_ledger::{handle_demo, handle_simulate, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Simulate {
            games,
            stake,
            seed,
            accounts,
            json,
        } => handle_simulate(*games, *stake, *seed, accounts, *json),
        Command::Demo { json } => handle_demo(*json),
    }
}
