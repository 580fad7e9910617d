use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::{Card, ELEMENTS, COPIES_PER_ELEMENT};

/// Total number of cards in a fresh deck (20 elements x 4 copies).
pub const DECK_SIZE: usize = 80;

/// Builds the 80-card deck in table order: every element from hydrogen to
/// calcium, four copies each, copy numbers 1..=4.
pub fn build_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for element in ELEMENTS.iter() {
        for copy in 1..=COPIES_PER_ELEMENT {
            v.push(Card { element, copy });
        }
    }
    v
}

/// Returns a uniformly random permutation of `cards` (Fisher-Yates); the
/// input slice is left untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// The undealt cards of a game, consumed from the front.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wraps cards in the given order; the first card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_cards(shuffle(&build_deck(), rng))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Takes up to `n` cards from the front. Fewer are returned when the
    /// deck runs short.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
