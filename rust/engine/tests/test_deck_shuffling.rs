use std::collections::HashSet;

use elemental_engine::cards::{Card, CardId, ELEMENTS};
use elemental_engine::deck::{build_deck, shuffle, Deck, DECK_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn fresh_deck_has_80_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    assert_eq!(deck.remaining(), DECK_SIZE);
    let mut set = HashSet::new();
    for i in 0..DECK_SIZE {
        let c = deck.deal_card().expect("should have 80 cards");
        assert!(set.insert(c.id()), "card {} duplicated at position {}", c.id(), i);
    }
    assert!(deck.deal_card().is_none(), "after 80 cards, deck should be empty");
}

#[test]
fn table_order_is_four_copies_per_element() {
    let cards = build_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    for (i, element) in ELEMENTS.iter().enumerate() {
        let ids: Vec<CardId> = cards[i * 4..i * 4 + 4].iter().map(Card::id).collect();
        let expected: Vec<CardId> = (1..=4)
            .map(|copy| CardId {
                atomic_number: element.atomic_number,
                copy,
            })
            .collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let d1 = Deck::new_with_seed(12345);
    let d2 = Deck::new_with_seed(12345);
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new_with_seed(1);
    let d2 = Deck::new_with_seed(2);
    assert_ne!(d1.cards(), d2.cards());
}

#[test]
fn shuffle_keeps_the_multiset_and_leaves_input_alone() {
    let original = build_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let shuffled = shuffle(&original, &mut rng);

    assert_eq!(original, build_deck());
    assert_ne!(shuffled, original);

    let mut a: Vec<CardId> = original.iter().map(Card::id).collect();
    let mut b: Vec<CardId> = shuffled.iter().map(Card::id).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn shuffle_of_empty_and_single_is_identity() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    assert!(shuffle(&[], &mut rng).is_empty());
    let one = [Card::new(7, 2).unwrap()];
    assert_eq!(shuffle(&one, &mut rng), one.to_vec());
}

#[test]
fn draw_n_takes_from_the_front() {
    let mut deck = Deck::new_with_seed(5);
    let expected: Vec<Card> = deck.cards()[..5].to_vec();
    assert_eq!(deck.draw_n(5), expected);
    assert_eq!(deck.remaining(), DECK_SIZE - 5);
}
