//! # handrank-engine: Texas Hold'em hand classification
//!
//! Classifies the best five-card hand a player can make from two hole cards
//! and five shared table cards into one of nine categories, from straight
//! flush down to high card. Classification works on counts grouped by suit
//! and by value instead of enumerating every five-card subset.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Card), values and parsing
//! - [`hand`] - Hand categories and the seven-card classifier
//! - [`deck`] - Deterministic dealing with ChaCha20 RNG
//! - [`showdown`] - Ordering players by category
//! - [`errors`] - Error types for invalid hands, deals and card text
//!
//! ## Quick Start
//!
//! ```rust
//! use handrank_engine::cards::{Card, Suit};
//! use handrank_engine::hand::{classify, Category};
//!
//! let player = [Card::new(Suit::Spade, 3), Card::new(Suit::Spade, 7)];
//! let table = [
//!     Card::new(Suit::Diamond, 2),
//!     Card::new(Suit::Spade, 4),
//!     Card::new(Suit::Spade, 5),
//!     Card::new(Suit::Club, 13),
//!     Card::new(Suit::Spade, 6),
//! ];
//!
//! assert_eq!(classify(&player, &table), Ok(Category::StraightFlush));
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use handrank_engine::deck::Deck;
//! use handrank_engine::showdown::rank_players;
//!
//! let deal = Deck::new_with_seed(42).deal(3).unwrap();
//! assert_eq!(deal, Deck::new_with_seed(42).deal(3).unwrap());
//!
//! let standings = rank_players(&deal).unwrap();
//! assert!(standings.windows(2).all(|w| w[0].category <= w[1].category));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod showdown;
