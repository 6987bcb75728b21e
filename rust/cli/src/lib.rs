//! # handrank CLI Library
//!
//! Command-line interface for the handrank engine: classify a hand, deal
//! seeded tables, tally categories over many rounds, and benchmark the
//! classifier.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand. Output
//! streams are passed in so tests can capture them.
//!
//! ```
//! let args = ["handrank", "rank", "--player", "3S 7S", "--table", "2D 4S 5S KC 6S"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = handrank_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Straight Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `rank`: Classify one player's two cards against five table cards
//! - `deal`: Deal one seeded table and order the players by category
//! - `sim`: Deal many tables and tally category frequencies
//! - `bench`: Measure classification throughput
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;
use tracing::warn;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HandrankCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_deal_command, handle_rank_command,
    handle_sim_command,
};
use config::Config;
use formatters::supports_unicode;

pub use error::CliError;

const COMMANDS: &[&str] = &["rank", "deal", "sim", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Errors are written to `err` as `Error: ...`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandrankCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: handrank <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: handrank --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Suit symbols for `rank`, which has no other use for the config: an
/// unreadable config falls back to the default.
fn rank_unicode() -> bool {
    let unicode = match config::load_layered() {
        Ok(cfg) => cfg.unicode,
        Err(e) => {
            warn!(error = %e, "ignoring configuration for rank");
            Config::default().unicode
        }
    };
    unicode && supports_unicode()
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Rank {
            player,
            table,
            json,
        } => handle_rank_command(&player, &table, json, rank_unicode(), out),
        Commands::Deal { players, seed } => {
            let cfg = config::load_layered()?;
            let players = config::check_players(players.unwrap_or(cfg.players))?;
            let unicode = cfg.unicode && supports_unicode();
            handle_deal_command(players, seed.or(cfg.seed), unicode, out)
        }
        Commands::Sim {
            rounds,
            players,
            seed,
            output,
        } => {
            let cfg = config::load_layered()?;
            let rounds = config::check_rounds(rounds.unwrap_or(cfg.rounds))?;
            let players = config::check_players(players.unwrap_or(cfg.players))?;
            handle_sim_command(rounds, players, seed.or(cfg.seed), output, out, err)
        }
        Commands::Bench { hands } => handle_bench_command(hands, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}
