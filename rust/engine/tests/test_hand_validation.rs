use handrank_engine::cards::{Card, Suit as S};
use handrank_engine::errors::InvalidHand;
use handrank_engine::hand::{classify, classify_cards, validate_hand};

fn c(s: S, v: u8) -> Card {
    Card::new(s, v)
}

fn seven() -> Vec<Card> {
    vec![
        c(S::Spade, 10),
        c(S::Diamond, 5),
        c(S::Heart, 9),
        c(S::Spade, 4),
        c(S::Spade, 7),
        c(S::Club, 12),
        c(S::Heart, 3),
    ]
}

#[test]
fn well_formed_hand_passes_validation() {
    assert_eq!(validate_hand(&seven()), Ok(()));
}

#[test]
fn rejects_wrong_card_count() {
    let mut cards = seven();
    cards.pop();
    assert_eq!(
        classify_cards(&cards),
        Err(InvalidHand::WrongCardCount {
            expected: 7,
            actual: 6
        })
    );

    let mut cards = seven();
    cards.push(c(S::Diamond, 13));
    assert_eq!(
        classify_cards(&cards),
        Err(InvalidHand::WrongCardCount {
            expected: 7,
            actual: 8
        })
    );

    assert_eq!(
        classify_cards(&[]),
        Err(InvalidHand::WrongCardCount {
            expected: 7,
            actual: 0
        })
    );
}

#[test]
fn rejects_duplicate_cards() {
    let mut cards = seven();
    cards[6] = cards[0];
    assert_eq!(
        classify_cards(&cards),
        Err(InvalidHand::DuplicateCard(c(S::Spade, 10)))
    );
}

#[test]
fn rejects_duplicate_between_player_and_table() {
    let player = [c(S::Spade, 3), c(S::Spade, 7)];
    let table = [
        c(S::Diamond, 2),
        c(S::Spade, 4),
        c(S::Spade, 5),
        c(S::Spade, 7),
        c(S::Spade, 6),
    ];
    assert_eq!(
        classify(&player, &table),
        Err(InvalidHand::DuplicateCard(c(S::Spade, 7)))
    );
}

#[test]
fn rejects_values_outside_range() {
    let mut cards = seven();
    cards[2] = c(S::Heart, 14);
    assert_eq!(
        classify_cards(&cards),
        Err(InvalidHand::ValueOutOfRange(14))
    );

    let mut cards = seven();
    cards[2] = c(S::Heart, 0);
    assert_eq!(classify_cards(&cards), Err(InvalidHand::ValueOutOfRange(0)));
}

#[test]
fn errors_render_readable_messages() {
    let e = InvalidHand::WrongCardCount {
        expected: 7,
        actual: 6,
    };
    assert_eq!(e.to_string(), "Invalid hand: expected 7 cards, got 6");
    let e = InvalidHand::DuplicateCard(c(S::Club, 1));
    assert_eq!(e.to_string(), "Invalid hand: card AC appears more than once");
}
