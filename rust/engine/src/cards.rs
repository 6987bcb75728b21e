use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardParseError;

/// Value of an Ace as stored on a card.
pub const ACE_LOW: u8 = 1;
/// Value an Ace takes when it completes a 10-J-Q-K-A straight.
pub const ACE_HIGH: u8 = 14;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

/// One of the four suits in a standard 52-card deck.
/// Suits carry no ranking; the derived ordering only makes sorting deterministic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spade,
    /// Hearts (♥)
    Heart,
    /// Clubs (♣)
    Club,
    /// Diamonds (♦)
    Diamond,
}

impl Suit {
    /// Dense index used by the grouped views.
    pub fn index(self) -> usize {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Club => 2,
            Suit::Diamond => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
        }
    }
}

/// A playing card: a suit and a value in `1..=13`, where Ace is 1 and
/// Jack, Queen and King are 11, 12 and 13.
///
/// The fields are public so callers can build any pair; hands are validated
/// when they are classified, not when cards are built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// Whether the value lies in `1..=13`.
    pub fn is_valid(&self) -> bool {
        (ACE_LOW..=KING).contains(&self.value)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond]
}

pub fn all_values() -> impl DoubleEndedIterator<Item = u8> {
    ACE_LOW..=KING
}

/// The 52 cards, suit by suit, Ace first.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for value in all_values() {
            v.push(Card::new(s, value));
        }
    }
    v
}

/// Short symbol for a card value: `A`, `2`..`9`, `T`, `J`, `Q`, `K`.
pub fn value_symbol(value: u8) -> String {
    match value {
        ACE_LOW | ACE_HIGH => "A".to_string(),
        10 => "T".to_string(),
        JACK => "J".to_string(),
        QUEEN => "Q".to_string(),
        KING => "K".to_string(),
        v => v.to_string(),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", value_symbol(self.value), self.suit.letter())
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" | "♠" => Ok(Suit::Spade),
            "H" | "♥" => Ok(Suit::Heart),
            "C" | "♣" => Ok(Suit::Club),
            "D" | "♦" => Ok(Suit::Diamond),
            _ => Err(CardParseError::UnknownSuit(s.to_string())),
        }
    }
}

/// Parses `<value><suit>` such as `AS`, `10h`, `Td` or `13C`.
///
/// Values are `A`/`1`, `2`..`10`, `T`, `J`/`11`, `Q`/`12`, `K`/`13`; suits are
/// `S`, `H`, `C`, `D` or their symbols. Both parts are case-insensitive.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suit_char) = s.chars().last() else {
            return Err(CardParseError::Empty);
        };
        let (value_part, suit_part) = s.split_at(s.len() - suit_char.len_utf8());
        if value_part.is_empty() {
            return Err(CardParseError::UnknownValue(s.to_string()));
        }

        let value = match value_part.to_ascii_uppercase().as_str() {
            "A" => ACE_LOW,
            "T" => 10,
            "J" => JACK,
            "Q" => QUEEN,
            "K" => KING,
            digits => match digits.parse::<u8>() {
                Ok(v) if (ACE_LOW..=KING).contains(&v) => v,
                _ => return Err(CardParseError::UnknownValue(value_part.to_string())),
            },
        };

        Ok(Card::new(suit_part.parse()?, value))
    }
}

/// Parses whitespace or comma separated cards, e.g. `"3S 7S"` or `"2d,4s"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}
