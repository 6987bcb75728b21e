use thiserror::Error;

use crate::cards::Card;

/// Reasons a set of cards cannot be classified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHand {
    #[error("Invalid hand: expected {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Invalid hand: card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Invalid hand: card value {0} is outside 1..=13")]
    ValueOutOfRange(u8),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Cannot deal to {requested} players (maximum {max})")]
    TooManyPlayers { requested: usize, max: usize },
    #[error("Deck ran out of cards")]
    DeckExhausted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Empty card")]
    Empty,
    #[error("Unknown card value '{0}'")]
    UnknownValue(String),
    #[error("Unknown suit '{0}'")]
    UnknownSuit(String),
}
