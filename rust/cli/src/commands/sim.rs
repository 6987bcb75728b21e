//! Simulation command handler: deal many tables and tally hand categories.
//!
//! Round `i` is dealt from a fresh deck seeded with `base_seed + i`, so any
//! single round can be reproduced with `deal --seed`.
//!
//! # Examples
//!
//! ```no_run
//! use handrank_cli::run;
//! use std::io;
//!
//! let args = ["handrank", "sim", "--rounds", "500", "--seed", "42", "--output", "data/sim.jsonl"];
//! run(args, &mut io::stdout(), &mut io::stderr());
//! ```

use crate::error::CliError;
use crate::io_utils::open_append;
use crate::ui;
use chrono::{SecondsFormat, Utc};
use handrank_engine::cards::Card;
use handrank_engine::deck::Deck;
use handrank_engine::hand::Category;
use handrank_engine::showdown::{Standing, rank_players};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Per-category counts over all classified hands.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub hands: [u64; 9],
    /// Rounds in which the category was the strongest at the table.
    pub best: [u64; 9],
}

impl Tally {
    fn record(&mut self, standings: &[Standing]) {
        for s in standings {
            self.hands[s.category.ordinal()] += 1;
        }
        if let Some(top) = standings.first() {
            self.best[top.category.ordinal()] += 1;
        }
    }

    pub fn total_hands(&self) -> u64 {
        self.hands.iter().sum()
    }
}

#[derive(Debug, Serialize)]
struct RoundRecord {
    round: u64,
    seed: u64,
    ts: String,
    table: Vec<String>,
    standings: Vec<StandingRecord>,
}

#[derive(Debug, Serialize)]
struct StandingRecord {
    seat: usize,
    hole: Vec<String>,
    category: &'static str,
}

fn card_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

fn round_record(round: u64, seed: u64, table: &[Card], standings: &[Standing]) -> RoundRecord {
    RoundRecord {
        round,
        seed,
        ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        table: card_strings(table),
        standings: standings
            .iter()
            .map(|s| StandingRecord {
                seat: s.seat,
                hole: card_strings(&s.hole),
                category: s.category.name(),
            })
            .collect(),
    }
}

/// Deal `rounds` tables for `players` seats and return the tally, calling
/// `on_round` with every ranked round.
pub fn simulate<F>(
    rounds: u64,
    players: u8,
    base_seed: u64,
    mut on_round: F,
) -> Result<Tally, CliError>
where
    F: FnMut(u64, u64, &[Card], &[Standing]) -> Result<(), CliError>,
{
    let mut tally = Tally::default();
    for round in 0..rounds {
        let seed = base_seed.wrapping_add(round);
        let deal = Deck::new_with_seed(seed).deal(players as usize)?;
        let standings = rank_players(&deal)?;
        tally.record(&standings);
        on_round(round, seed, &deal.table, &standings)?;
    }
    Ok(tally)
}

/// Handle the sim command.
///
/// Prints a summary line and a category table. With `output` set, each round
/// is appended to the file as one JSON line.
pub fn handle_sim_command(
    rounds: u64,
    players: u8,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut writer = match output.as_deref() {
        Some(p) => {
            let path = Path::new(p);
            if path.exists() {
                ui::display_warning(err, &format!("appending to existing file {}", p))?;
            }
            Some(open_append(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?)
        }
        None => None,
    };

    info!(rounds, players, seed = base_seed, "simulation started");
    let tally = simulate(rounds, players, base_seed, |round, seed, table, standings| {
        if let Some(w) = writer.as_mut() {
            let record = round_record(round, seed, table, standings);
            let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
            writeln!(w, "{}", line)?;
        }
        Ok(())
    })?;
    if let Some(mut w) = writer {
        w.flush()?;
    }
    info!(hands = tally.total_hands(), "simulation finished");

    write_summary(&tally, rounds, players, base_seed, out)?;
    if let Some(p) = output {
        writeln!(out, "Records: {}", p)?;
    }
    Ok(())
}

fn write_summary(
    tally: &Tally,
    rounds: u64,
    players: u8,
    base_seed: u64,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let total = tally.total_hands();
    writeln!(
        out,
        "Simulated: {} rounds, {} players, seed {}",
        rounds, players, base_seed
    )?;
    writeln!(out, "Hands classified: {}", total)?;
    writeln!(out, "{:<15} {:>8} {:>8} {:>8}", "Category", "Hands", "Share", "Best")?;
    for category in Category::ALL {
        let i = category.ordinal();
        let share = if total == 0 {
            0.0
        } else {
            tally.hands[i] as f64 * 100.0 / total as f64
        };
        writeln!(
            out,
            "{:<15} {:>8} {:>7.2}% {:>8}",
            category.name(),
            tally.hands[i],
            share,
            tally.best[i]
        )?;
    }
    Ok(())
}
