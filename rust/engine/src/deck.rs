use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::DealError;

/// Cards shared by every player.
pub const TABLE_SIZE: usize = 5;
/// Most players one deck can serve: two cards each plus the table.
pub const MAX_PLAYERS: usize = (52 - TABLE_SIZE) / 2;

/// Hole cards for each seat plus the shared table cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub players: Vec<[Card; 2]>,
    pub table: [Card; TABLE_SIZE],
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Shuffles and deals two cards to each of `num_players` seats, then the
    /// five table cards. Cards are drawn without replacement.
    pub fn deal(&mut self, num_players: usize) -> Result<Deal, DealError> {
        if num_players == 0 {
            return Err(DealError::NoPlayers);
        }
        if num_players > MAX_PLAYERS {
            return Err(DealError::TooManyPlayers {
                requested: num_players,
                max: MAX_PLAYERS,
            });
        }

        self.shuffle();
        let mut players = Vec::with_capacity(num_players);
        for _ in 0..num_players {
            players.push([self.draw()?, self.draw()?]);
        }
        let mut table = [self.draw()?; TABLE_SIZE];
        for slot in table.iter_mut().skip(1) {
            *slot = self.draw()?;
        }
        debug!(num_players, remaining = self.remaining(), "dealt hand");
        Ok(Deal { players, table })
    }

    fn draw(&mut self) -> Result<Card, DealError> {
        self.deal_card().ok_or(DealError::DeckExhausted)
    }
}
