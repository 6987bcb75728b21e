//! Card, board, and category formatters for terminal display.
//!
//! Cards render as value plus suit, with Unicode suit symbols when the
//! terminal supports them and the config allows it, and ASCII letters
//! otherwise.
//!
//! - **Unicode mode**: `A♠ T♥ 7♦ 2♣`
//! - **ASCII mode**: `AS TH 7D 2C`
//!
//! ## Example
//!
//! ```rust
//! use handrank_engine::cards::{Card, Suit};
//! use handrank_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Suit::Spade, 1);
//! assert_eq!(format_card(&ace_spades, false), "AS");
//!
//! let board = vec![ace_spades];
//! assert_eq!(format_board(&board, false), "[AS]");
//! ```

use handrank_engine::cards::{Card, Suit, value_symbol};
use handrank_engine::hand::Category;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit, unicode: bool) -> String {
    if unicode {
        match suit {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Club => "♣",
            Suit::Diamond => "♦",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Card as a string combining value and suit, e.g. `"A♠"` or `"AS"`.
pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", value_symbol(card.value), format_suit(&card.suit, unicode))
}

/// Format a list of cards in bracket notation, `"[]"` when empty.
pub fn format_board(cards: &[Card], unicode: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, unicode)).collect();
    format!("[{}]", formatted.join(" "))
}

/// Category with its report name, e.g. `"Two Pair (Two_pair)"`.
pub fn format_category(category: Category) -> String {
    format!("{} ({})", category, category.name())
}
