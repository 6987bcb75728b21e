//! Parsing and validation of card arguments.
//!
//! Card lists arrive as free text such as `"3S 7S"` or `"2d,4s,5s,kc,6s"`.
//! These helpers check the count for each role before the hand reaches the
//! classifier, which then checks values and duplicates.

use handrank_engine::cards::{Card, parse_cards};
use handrank_engine::deck::TABLE_SIZE;

use crate::error::CliError;

/// Parse exactly `N` cards for the named role (`"player"` or `"table"`).
pub fn parse_card_array<const N: usize>(input: &str, role: &str) -> Result<[Card; N], CliError> {
    let cards = parse_cards(input)?;
    <[Card; N]>::try_from(cards.as_slice()).map_err(|_| {
        CliError::InvalidInput(format!(
            "{} needs exactly {} cards, got {}",
            role,
            N,
            cards.len()
        ))
    })
}

/// Parse the two hole cards.
///
/// # Example
///
/// ```rust
/// # use handrank_cli::validation::parse_player_cards;
/// let hole = parse_player_cards("AS KD").unwrap();
/// assert_eq!(hole[0].value, 1);
/// assert!(parse_player_cards("AS").is_err());
/// ```
pub fn parse_player_cards(input: &str) -> Result<[Card; 2], CliError> {
    parse_card_array::<2>(input, "player")
}

/// Parse the five table cards.
pub fn parse_table_cards(input: &str) -> Result<[Card; TABLE_SIZE], CliError> {
    parse_card_array::<TABLE_SIZE>(input, "table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_engine::cards::Suit;

    #[test]
    fn parses_table_cards() {
        let table = parse_table_cards("2D 4S 5S KC 6S").unwrap();
        assert_eq!(table[0], Card::new(Suit::Diamond, 2));
        assert_eq!(table[3], Card::new(Suit::Club, 13));
    }

    #[test]
    fn reports_wrong_counts() {
        match parse_table_cards("2D 4S") {
            Err(CliError::InvalidInput(msg)) => {
                assert_eq!(msg, "table needs exactly 5 cards, got 2")
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(parse_player_cards("AS KD QH").is_err());
    }

    #[test]
    fn reports_unparseable_cards() {
        match parse_player_cards("AS ZZ") {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("Unknown")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
