use clap::{Parser, Subcommand};

use crate::services::roster::AccountSpec;

#[derive(Parser, Debug)]
#[command(author, version, about = "game-rating-ledger simulator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Play randomly decided games between a roster of accounts
    Simulate {
        /// Number of games to play (defaults to 20)
        #[arg(short, long)]
        games: Option<usize>,
        /// Rating at stake in each game (defaults to 10)
        #[arg(short, long)]
        stake: Option<u32>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Accounts as name[:tier[:multiplier]], comma separated
        #[arg(short, long, value_delimiter = ',')]
        accounts: Vec<AccountSpec>,
        /// Print histories as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the scripted sample: one account per tier, one game per variant
    Demo {
        /// Print histories as JSON
        #[arg(long)]
        json: bool,
    },
}
