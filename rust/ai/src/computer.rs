//! Heuristic computer opponent.
//!
//! Discards follow a fixed priority chain; betting compares a 0-1 hand
//! strength against fixed thresholds and only uses randomness to decide
//! whether a strong hand raises or calls.

use std::collections::HashMap;

use elemental_engine::cards::{Card, ElementGroup};
use elemental_engine::hand::{evaluate_hand, HandRank, HandResult, HAND_SIZE};
use elemental_engine::player::Player;
use elemental_engine::policy::{BettingDecision, ComputerPolicy};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::Difficulty;

/// Strength above which a hand is worth raising.
const RAISE_THRESHOLD: f64 = 0.8;
/// Strength above which a hand always calls.
const CALL_THRESHOLD: f64 = 0.5;
/// Strength above which a short stack still calls.
const SHORT_STACK_CALL_THRESHOLD: f64 = 0.6;
/// Marginal hands call only below this pot odds.
const MARGINAL_THRESHOLD: f64 = 0.3;
const MAX_POT_ODDS_FOR_MARGINAL: f64 = 0.3;

/// Rule-based opponent whose difficulty only changes how often it raises.
///
/// # Example
///
/// ```rust
/// use elemental_ai::computer::ComputerAI;
/// use elemental_ai::Difficulty;
/// use elemental_engine::cards::Card;
/// use elemental_engine::policy::ComputerPolicy;
///
/// let ai = ComputerAI::new(Difficulty::Medium);
/// // a pair of lithiums: keep the pair, replace the rest
/// let hand: Vec<Card> = [(3, 1), (9, 1), (3, 2), (12, 1), (20, 1)]
///     .iter()
///     .map(|&(n, c)| Card::new(n, c).unwrap())
///     .collect();
/// assert_eq!(ai.select_discards(&hand), vec![1, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ComputerAI {
    difficulty: Difficulty,
    name: String,
}

impl ComputerAI {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            name: format!("ComputerAI({})", difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for ComputerAI {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Maps a hand result onto 0..=1: the rank's share of the ladder plus a
/// small bonus for the high card.
pub fn hand_strength(result: &HandResult) -> f64 {
    let base = f64::from(result.rank.ordinal()) / 8.0;
    let bonus = f64::from(result.high_card) / 20.0 * 0.1;
    (base + bonus).min(1.0)
}

/// Share of the pot a call would represent; zero when nothing is at stake.
pub fn pot_odds(current_bet: u32, pot: u32) -> f64 {
    let total = u64::from(pot) + u64::from(current_bet);
    if total == 0 {
        return 0.0;
    }
    current_bet as f64 / total as f64
}

fn select(hand: &[Card]) -> Vec<usize> {
    if hand.len() != HAND_SIZE {
        return Vec::new();
    }
    let result = evaluate_hand(hand);
    if result.rank >= HandRank::TwoPair {
        return Vec::new();
    }
    if result.rank == HandRank::OnePair {
        return pair_discards(hand);
    }
    if let Some(index) = straight_draw_outlier(hand) {
        return vec![index];
    }
    if let Some(index) = flush_draw_outlier(hand) {
        return vec![index];
    }
    lowest_three(hand)
}

/// Every slot that is not one of the paired cards, in hand order.
fn pair_discards(hand: &[Card]) -> Vec<usize> {
    let mut counts: HashMap<u8, u8> = HashMap::new();
    for c in hand {
        *counts.entry(c.atomic_number()).or_insert(0) += 1;
    }
    let Some(pair) = counts.iter().find(|(_, n)| **n == 2).map(|(k, _)| *k) else {
        return Vec::new();
    };
    (0..hand.len())
        .filter(|&i| hand[i].atomic_number() != pair)
        .collect()
}

/// Hand slots ordered by atomic number, lowest first. Equal numbers keep
/// hand order.
fn slots_by_number(hand: &[Card]) -> Vec<usize> {
    let mut slots: Vec<usize> = (0..hand.len()).collect();
    slots.sort_by_key(|&i| hand[i].atomic_number());
    slots
}

/// The one slot outside a four-card run, if the hand holds one.
fn straight_draw_outlier(hand: &[Card]) -> Option<usize> {
    let slots = slots_by_number(hand);
    let run = |window: &[usize]| {
        window
            .windows(2)
            .all(|w| hand[w[1]].atomic_number() == hand[w[0]].atomic_number() + 1)
    };
    if run(&slots[..4]) {
        Some(slots[4])
    } else if run(&slots[1..]) {
        Some(slots[0])
    } else {
        None
    }
}

/// The one slot outside a four-card group, if the hand holds one.
fn flush_draw_outlier(hand: &[Card]) -> Option<usize> {
    let mut counts: HashMap<ElementGroup, usize> = HashMap::new();
    for c in hand {
        *counts.entry(c.group()).or_insert(0) += 1;
    }
    let (&major, _) = counts.iter().find(|(_, n)| **n >= 4)?;
    (0..hand.len()).find(|&i| hand[i].group() != major)
}

fn lowest_three(hand: &[Card]) -> Vec<usize> {
    slots_by_number(hand).into_iter().take(3).collect()
}

impl ComputerPolicy for ComputerAI {
    fn select_discards(&self, hand: &[Card]) -> Vec<usize> {
        let discards = select(hand);
        debug!(ai = %self.name, ?discards, "discards selected");
        discards
    }

    /// A stack counts as short only when it cannot cover `to_call` (the
    /// amount still owed), not when it is below the table bet itself.
    fn decide_betting(
        &self,
        player: &Player,
        current_bet: u32,
        pot: u32,
        rng: &mut dyn RngCore,
    ) -> BettingDecision {
        let result = player
            .hand_result()
            .copied()
            .unwrap_or_else(|| evaluate_hand(player.hand()));
        let strength = hand_strength(&result);
        let odds = pot_odds(current_bet, pot);

        let decision = if player.chips() < player.to_call(current_bet) {
            if strength > SHORT_STACK_CALL_THRESHOLD {
                BettingDecision::Call
            } else {
                BettingDecision::Fold
            }
        } else if strength > RAISE_THRESHOLD {
            if rng.random::<f64>() < self.difficulty.aggressiveness() {
                BettingDecision::Raise
            } else {
                BettingDecision::Call
            }
        } else if strength > CALL_THRESHOLD {
            BettingDecision::Call
        } else if strength > MARGINAL_THRESHOLD && odds < MAX_POT_ODDS_FOR_MARGINAL {
            BettingDecision::Call
        } else {
            BettingDecision::Fold
        };

        debug!(
            ai = %self.name,
            strength,
            pot_odds = odds,
            ?decision,
            "betting decision"
        );
        decision
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: [(u8, u8); 5]) -> Vec<Card> {
        cards
            .iter()
            .map(|&(n, c)| Card::new(n, c).unwrap())
            .collect()
    }

    #[test]
    fn strength_scales_rank_and_high_card() {
        let quads = evaluate_hand(&hand([(1, 1), (1, 2), (1, 3), (1, 4), (2, 1)]));
        assert!((hand_strength(&quads) - (7.0 / 8.0 + 0.01)).abs() < 1e-9);

        let straight_flush = evaluate_hand(&hand([(5, 1), (6, 1), (7, 1), (8, 1), (9, 1)]));
        assert_eq!(hand_strength(&straight_flush), 1.0);

        assert_eq!(hand_strength(&HandResult::zero()), 0.0);
    }

    #[test]
    fn pot_odds_handles_empty_pot() {
        assert_eq!(pot_odds(0, 0), 0.0);
        assert!((pot_odds(50, 150) - 0.25).abs() < 1e-9);
        assert_eq!(pot_odds(0, 100), 0.0);
    }

    #[test]
    fn made_hands_are_kept() {
        // two pair
        let two_pair = hand([(1, 1), (1, 2), (2, 1), (2, 2), (3, 1)]);
        assert!(select(&two_pair).is_empty());
        // flush of nonmetals
        let flush = hand([(1, 1), (5, 1), (7, 1), (9, 1), (13, 1)]);
        assert!(select(&flush).is_empty());
    }

    #[test]
    fn straight_draw_replaces_the_outlier() {
        // 3 4 5 6 run with a stray 12 in slot 2
        let low_run = hand([(4, 1), (3, 1), (12, 1), (6, 1), (5, 1)]);
        assert_eq!(select(&low_run), vec![2]);
        // stray 1 below a 10 11 12 13 run
        let high_run = hand([(11, 1), (1, 1), (13, 1), (10, 1), (12, 1)]);
        assert_eq!(select(&high_run), vec![1]);
    }

    #[test]
    fn flush_draw_replaces_the_off_group_card() {
        // four nonmetals and a calcium, no run
        let cards = hand([(1, 1), (20, 1), (5, 1), (8, 1), (14, 1)]);
        assert_eq!(select(&cards), vec![1]);
    }

    #[test]
    fn otherwise_the_three_lowest_go() {
        let cards = hand([(20, 1), (2, 1), (11, 1), (4, 1), (18, 1)]);
        assert_eq!(select(&cards), vec![1, 3, 2]);
    }

    #[test]
    fn malformed_hands_discard_nothing() {
        let cards = hand([(20, 1), (2, 1), (11, 1), (4, 1), (18, 1)]);
        assert!(select(&cards[..3]).is_empty());
    }
}
