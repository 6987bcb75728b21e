//! Bench command handler for classification throughput.
//!
//! Hands are dealt up front from a deck seeded with `1`, so only the
//! classifier is inside the timed loop.

use crate::error::CliError;
use handrank_engine::cards::Card;
use handrank_engine::deck::{Deck, TABLE_SIZE};
use handrank_engine::hand::classify;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

const BENCH_SEED: u64 = 1;

fn deal_hands(count: u64) -> Result<Vec<([Card; 2], [Card; TABLE_SIZE])>, CliError> {
    let mut deck = Deck::new_with_seed(BENCH_SEED);
    (0..count)
        .map(|_| {
            let deal = deck.deal(1)?;
            Ok((deal.players[0], deal.table))
        })
        .collect()
}

/// Handle the bench command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_bench_command(200, &mut out).unwrap();
/// ```
pub fn handle_bench_command(hands: u64, out: &mut dyn Write) -> Result<(), CliError> {
    let dealt = deal_hands(hands)?;

    let start = Instant::now();
    let mut counts = [0u64; 9];
    for (hole, table) in &dealt {
        let category = classify(black_box(hole), black_box(table))?;
        counts[category.ordinal()] += 1;
    }
    let dur = start.elapsed();
    debug!(?counts, "bench categories");

    let secs = dur.as_secs_f64();
    let rate = if secs > 0.0 {
        dealt.len() as f64 / secs
    } else {
        f64::INFINITY
    };
    writeln!(
        out,
        "Benchmark: {} hands in {:?} ({:.0} hands/sec)",
        dealt.len(),
        dur,
        rate
    )?;
    Ok(())
}
