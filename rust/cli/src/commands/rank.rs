//! Rank command handler: classify one player's hand against the table.

use crate::error::CliError;
use crate::formatters::{format_board, format_category};
use crate::validation::{parse_player_cards, parse_table_cards};
use handrank_engine::cards::Card;
use handrank_engine::hand::classify;
use std::io::Write;

fn card_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

/// Handle the rank command.
///
/// Card text is parsed and counted here; the classifier then rejects
/// duplicates and out-of-range values. With `json` set the result is a single
/// JSON object instead of the three text lines.
pub fn handle_rank_command(
    player: &str,
    table: &str,
    json: bool,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_player_cards(player)?;
    let board = parse_table_cards(table)?;
    let category = classify(&hole, &board)?;

    if json {
        let value = serde_json::json!({
            "player": card_strings(&hole),
            "table": card_strings(&board),
            "category": category.to_string(),
            "name": category.name(),
            "ordinal": category.ordinal(),
        });
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    writeln!(out, "Player: {}", format_board(&hole, unicode))?;
    writeln!(out, "Table: {}", format_board(&board, unicode))?;
    writeln!(out, "Category: {}", format_category(category))?;
    Ok(())
}
