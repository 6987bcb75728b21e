//! Command-line argument types.

use clap::{Parser, Subcommand, value_parser};

#[derive(Debug, Parser)]
#[command(
    name = "handrank",
    version,
    about = "Texas Hold'em hand classifier",
    long_about = "Classify the best hand from two hole cards and five table cards, \
                  deal seeded hands, and tally hand categories."
)]
pub struct HandrankCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify one player's hand against the table cards
    Rank {
        /// Two hole cards, e.g. "3S 7S"
        #[arg(long)]
        player: String,
        /// Five table cards, e.g. "2D 4S 5S KC 6S"
        #[arg(long)]
        table: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal one table and order the players by hand category
    Deal {
        #[arg(long, value_parser = value_parser!(u8).range(1..=23))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal many tables and tally hand categories
    Sim {
        #[arg(long, value_parser = value_parser!(u64).range(1..))]
        rounds: Option<u64>,
        #[arg(long, value_parser = value_parser!(u8).range(1..=23))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append one JSON record per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Measure classification throughput
    Bench {
        #[arg(long, default_value_t = 10_000, value_parser = value_parser!(u64).range(1..))]
        hands: u64,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
