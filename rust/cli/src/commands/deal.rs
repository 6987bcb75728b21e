//! Deal command handler: one seeded table, players ordered by category.
//!
//! Output is the seed, the table, then one line per player from the strongest
//! category down. Players with the same category keep seat order.

use crate::error::CliError;
use crate::formatters::format_board;
use handrank_engine::deck::Deck;
use handrank_engine::showdown::rank_players;
use std::io::Write;
use tracing::debug;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(3, Some(42), false, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: u8,
    seed: Option<u64>,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    let deal = deck.deal(players as usize)?;
    let standings = rank_players(&deal)?;
    debug!(seed = base_seed, players, "deal ranked");

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Table: {}", format_board(&deal.table, unicode))?;
    for s in &standings {
        writeln!(
            out,
            "Player {} has a {} {}",
            s.seat + 1,
            s.category,
            format_board(&s.hole, unicode)
        )?;
    }
    Ok(())
}
