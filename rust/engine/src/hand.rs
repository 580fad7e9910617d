use std::collections::HashMap;

use serde::Serialize;

use crate::cards::{Card, ElementGroup};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Score distance between adjacent ranks. Larger than any atomic number, so
/// a better rank always outscores a worse one.
pub const RANK_TIER: u32 = 1000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandRank {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }

    pub fn all() -> [HandRank; 9] {
        [
            HandRank::HighCard,
            HandRank::OnePair,
            HandRank::TwoPair,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
        ]
    }
}

/// Outcome of evaluating five cards. `score` orders hands across ranks and,
/// within a rank, by the highest atomic number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct HandResult {
    pub rank: HandRank,
    pub rank_name: &'static str,
    pub high_card: u8,
    pub score: u32,
}

impl HandResult {
    fn new(rank: HandRank, high_card: u8) -> Self {
        Self {
            rank,
            rank_name: rank.name(),
            high_card,
            score: RANK_TIER * rank.ordinal() as u32 + high_card as u32,
        }
    }

    /// The fail-closed result for a malformed hand: high card, nothing held.
    pub fn zero() -> Self {
        Self::new(HandRank::HighCard, 0)
    }
}

/// Scores a five-card hand.
///
/// Anything other than exactly five cards yields [`HandResult::zero`]
/// instead of an error.
///
/// # Examples
///
/// ```
/// use elemental_engine::cards::Card;
/// use elemental_engine::hand::{evaluate_hand, HandRank};
///
/// // C, N, O, F, B: five consecutive nonmetals
/// let cards: Vec<Card> = [5, 6, 7, 8, 9]
///     .iter()
///     .map(|&n| Card::new(n, 1).unwrap())
///     .collect();
/// let result = evaluate_hand(&cards);
/// assert_eq!(result.rank, HandRank::StraightFlush);
/// assert_eq!(result.score, 8009);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandResult {
    if cards.len() != HAND_SIZE {
        return HandResult::zero();
    }

    let mut numbers: Vec<u8> = cards.iter().map(|c| c.atomic_number()).collect();
    numbers.sort_unstable();

    let mut number_counts: HashMap<u8, u8> = HashMap::new();
    for &n in &numbers {
        *number_counts.entry(n).or_insert(0) += 1;
    }
    let mut group_counts: HashMap<ElementGroup, u8> = HashMap::new();
    for c in cards {
        *group_counts.entry(c.group()).or_insert(0) += 1;
    }

    let mut counts: Vec<u8> = number_counts.values().copied().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let high_card = numbers[HAND_SIZE - 1];
    let is_flush = group_counts.len() == 1;
    let is_straight = is_consecutive(&numbers);

    let rank = if is_straight && is_flush {
        HandRank::StraightFlush
    } else if counts[0] == 4 {
        HandRank::FourOfAKind
    } else if counts[..] == [3, 2] {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if counts[0] == 3 {
        HandRank::ThreeOfAKind
    } else if counts[..] == [2, 2, 1] {
        HandRank::TwoPair
    } else if counts[0] == 2 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    };

    HandResult::new(rank, high_card)
}

/// True when the sorted numbers step up by exactly one each time. There is
/// no wraparound: 17-18-19-20-1 is not a run.
fn is_consecutive(sorted: &[u8]) -> bool {
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Index of the best hand; on equal scores the earliest index wins.
pub fn best_hand_index(results: &[HandResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, r) in results.iter().enumerate() {
        match best {
            Some(b) if r.score <= results[b].score => {}
            _ => best = Some(i),
        }
    }
    best
}
