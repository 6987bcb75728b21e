use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, ACE_HIGH, ACE_LOW, KING};
use crate::errors::InvalidHand;

/// Cards a player can use: two hole cards plus the five on the table.
pub const HAND_SIZE: usize = 7;

/// Hand categories, strongest first.
///
/// The ordinal is the ranking: a lower ordinal is a stronger hand, so sorting
/// ascending puts the best hand first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    StraightFlush = 0,
    FourOfAKind = 1,
    FullHouse = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    TwoPair = 6,
    OnePair = 7,
    HighCard = 8,
}

/// Report names, indexed by [`Category::ordinal`].
pub const CATEGORY_NAMES: [&str; 9] = [
    "Straight_flush",
    "Four_kind",
    "Full_House",
    "Flush",
    "Straight",
    "Three_kind",
    "Two_pair",
    "One_pair",
    "High_card",
];

const CATEGORY_LABELS: [&str; 9] = [
    "Straight Flush",
    "Four of a Kind",
    "Full House",
    "Flush",
    "Straight",
    "Three of a Kind",
    "Two Pair",
    "One Pair",
    "High Card",
];

impl Category {
    pub const ALL: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Category> {
        Self::ALL.get(ordinal).copied()
    }

    /// Fixed report name, e.g. `Straight_flush`.
    pub fn name(self) -> &'static str {
        CATEGORY_NAMES[self.ordinal()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CATEGORY_LABELS[self.ordinal()])
    }
}

/// Per-call views of a hand grouped by suit and by value.
#[derive(Debug)]
struct GroupedCards {
    values_by_suit: [Vec<u8>; 4],
    suit_counts: [u8; 4],
    // index 0 unused; values are 1..=13
    value_counts: [u8; KING as usize + 1],
}

impl GroupedCards {
    fn new(cards: &[Card]) -> Self {
        let mut values_by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
        let mut suit_counts = [0u8; 4];
        let mut value_counts = [0u8; KING as usize + 1];
        for c in cards {
            let s = c.suit.index();
            values_by_suit[s].push(c.value);
            suit_counts[s] += 1;
            value_counts[c.value as usize] += 1;
        }
        Self {
            values_by_suit,
            suit_counts,
            value_counts,
        }
    }

    /// Suit index holding the most cards, with its count. The first suit wins
    /// a tie, which cannot matter once the count reaches five in seven cards.
    fn longest_suit(&self) -> (usize, u8) {
        let mut best = (0, self.suit_counts[0]);
        for (s, &count) in self.suit_counts.iter().enumerate().skip(1) {
            if count > best.1 {
                best = (s, count);
            }
        }
        best
    }

    fn has_value_count(&self, n: u8) -> bool {
        self.value_counts.contains(&n)
    }

    fn values_with_count(&self, n: u8) -> usize {
        self.value_counts.iter().filter(|&&c| c == n).count()
    }

    fn distinct_values(&self) -> Vec<u8> {
        (ACE_LOW..=KING)
            .filter(|&v| self.value_counts[v as usize] > 0)
            .collect()
    }
}

/// Whether `values` contain five consecutive values.
///
/// An Ace (1) also counts as 14, so both A-2-3-4-5 and 10-J-Q-K-A are found.
/// Duplicates are ignored. The input is left untouched.
pub fn is_straight(values: &[u8]) -> bool {
    let mut candidates = values.to_vec();
    if values.contains(&ACE_LOW) {
        candidates.push(ACE_HIGH);
    }
    candidates.sort_unstable();
    candidates.dedup();

    let mut run = 1;
    for w in candidates.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            if run == 5 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

fn is_straight_flush(grouped: &GroupedCards) -> bool {
    let (suit, count) = grouped.longest_suit();
    count >= 5 && is_straight(&grouped.values_by_suit[suit])
}

/// A triple plus at most two unmatched values. With seven cards that leaves
/// either a pair or a second triple to complete the house.
fn is_full_house(grouped: &GroupedCards) -> bool {
    grouped.has_value_count(3) && grouped.values_with_count(1) <= 2
}

/// Checks that `cards` is a well-formed seven-card hand: the right count,
/// values in `1..=13`, and no card repeated.
pub fn validate_hand(cards: &[Card]) -> Result<(), InvalidHand> {
    if cards.len() != HAND_SIZE {
        return Err(InvalidHand::WrongCardCount {
            expected: HAND_SIZE,
            actual: cards.len(),
        });
    }
    let mut seen = [[false; KING as usize + 1]; 4];
    for &c in cards {
        if !c.is_valid() {
            return Err(InvalidHand::ValueOutOfRange(c.value));
        }
        let slot = &mut seen[c.suit.index()][c.value as usize];
        if *slot {
            return Err(InvalidHand::DuplicateCard(c));
        }
        *slot = true;
    }
    Ok(())
}

/// Classifies the best hand a player holds from two hole cards and the five
/// table cards.
pub fn classify(player: &[Card; 2], table: &[Card; 5]) -> Result<Category, InvalidHand> {
    let mut cards = [player[0]; HAND_SIZE];
    cards[..5].copy_from_slice(table);
    cards[5..].copy_from_slice(player);
    classify_cards(&cards)
}

/// Classifies seven cards in any order.
pub fn classify_cards(cards: &[Card]) -> Result<Category, InvalidHand> {
    validate_hand(cards)?;
    let grouped = GroupedCards::new(cards);
    trace!(?grouped, "grouped hand");

    let category = if is_straight_flush(&grouped) {
        Category::StraightFlush
    } else if grouped.has_value_count(4) {
        Category::FourOfAKind
    } else if is_full_house(&grouped) {
        Category::FullHouse
    } else if grouped.longest_suit().1 >= 5 {
        Category::Flush
    } else if is_straight(&grouped.distinct_values()) {
        Category::Straight
    } else if grouped.has_value_count(3) {
        Category::ThreeOfAKind
    } else {
        match grouped.values_with_count(2) {
            0 => Category::HighCard,
            1 => Category::OnePair,
            _ => Category::TwoPair,
        }
    };

    debug!(%category, "classified hand");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn grouped(values: &[(Suit, u8)]) -> GroupedCards {
        let cards: Vec<Card> = values.iter().map(|&(s, v)| Card::new(s, v)).collect();
        GroupedCards::new(&cards)
    }

    #[test]
    fn categories_sort_strongest_first() {
        let mut shuffled = vec![
            Category::OnePair,
            Category::StraightFlush,
            Category::HighCard,
            Category::Flush,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                Category::StraightFlush,
                Category::Flush,
                Category::OnePair,
                Category::HighCard
            ]
        );
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.ordinal(), i);
            assert_eq!(Category::from_ordinal(i), Some(*c));
        }
        assert_eq!(Category::from_ordinal(9), None);
    }

    #[test]
    fn names_follow_ordinals() {
        assert_eq!(Category::StraightFlush.name(), "Straight_flush");
        assert_eq!(Category::FullHouse.name(), "Full_House");
        assert_eq!(Category::HighCard.name(), "High_card");
        assert_eq!(Category::FourOfAKind.to_string(), "Four of a Kind");
    }

    #[test]
    fn grouping_counts_suits_and_values() {
        let g = grouped(&[
            (Suit::Spade, 3),
            (Suit::Spade, 7),
            (Suit::Heart, 3),
            (Suit::Club, 13),
        ]);
        assert_eq!(g.suit_counts, [2, 1, 1, 0]);
        assert_eq!(g.value_counts[3], 2);
        assert_eq!(g.value_counts[13], 1);
        assert_eq!(g.values_by_suit[Suit::Spade.index()], vec![3, 7]);
        assert_eq!(g.longest_suit(), (0, 2));
        assert_eq!(g.distinct_values(), vec![3, 7, 13]);
    }

    #[test]
    fn straight_detection_handles_aces_both_ways() {
        assert!(is_straight(&[1, 2, 3, 4, 5]));
        assert!(is_straight(&[10, 11, 12, 13, 1]));
        assert!(!is_straight(&[11, 12, 13, 1, 2]));
        assert!(!is_straight(&[2, 3, 4, 5, 7, 8, 9]));
        assert!(!is_straight(&[]));
    }

    #[test]
    fn straight_detection_ignores_duplicates() {
        // A repeated value between run members must not reset the run.
        assert!(is_straight(&[4, 5, 5, 6, 7, 8, 8]));
        assert!(is_straight(&[1, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn straight_detection_leaves_input_untouched() {
        let values = vec![1, 10, 11, 12, 13];
        assert!(is_straight(&values));
        assert_eq!(values, vec![1, 10, 11, 12, 13]);
    }

    #[test]
    fn full_house_predicate_counts_leftover_singles() {
        // triple + pair + two singles
        let g = grouped(&[
            (Suit::Spade, 3),
            (Suit::Heart, 3),
            (Suit::Club, 3),
            (Suit::Spade, 5),
            (Suit::Club, 5),
            (Suit::Spade, 9),
            (Suit::Club, 11),
        ]);
        assert!(is_full_house(&g));

        // triple + four singles
        let g = grouped(&[
            (Suit::Spade, 3),
            (Suit::Heart, 3),
            (Suit::Club, 3),
            (Suit::Spade, 5),
            (Suit::Club, 6),
            (Suit::Spade, 9),
            (Suit::Club, 11),
        ]);
        assert!(!is_full_house(&g));
    }
}
