//! Shared fixtures for engine integration tests.
//!
//! - `stacked_deck`: deals the listed hands seat by seat, then the listed
//!   draw cards, then the rest of the deck in table order.
//! - `Scripted`: a computer policy with a fixed betting decision and discard list.
//! - `table`: a manager plus a game seated from a stacked deck.
//! - `assert_cards_accounted`: deck, hands and discards hold the full deck once.
#![allow(dead_code)]

use std::collections::HashSet;

use elemental_engine::cards::{Card, CardId};
use elemental_engine::deck::{build_deck, Deck, DECK_SIZE};
use elemental_engine::engine::GameManager;
use elemental_engine::game::{GameMode, GameState, TableConfig};
use elemental_engine::player::Player;
use elemental_engine::policy::{BettingDecision, ComputerPolicy};
use rand::RngCore;

pub fn stacked_deck(hands: &[[u8; 5]], then: &[u8]) -> Deck {
    let mut used = [0u8; 21];
    let mut cards = Vec::new();
    for &n in hands.iter().flatten().chain(then) {
        used[n as usize] += 1;
        cards.push(Card::new(n, used[n as usize]).expect("at most four copies of an element"));
    }
    for c in build_deck() {
        if c.copy > used[c.atomic_number() as usize] {
            cards.push(c);
        }
    }
    Deck::from_cards(cards)
}

pub fn numbers(hand: &[Card]) -> Vec<u8> {
    hand.iter().map(Card::atomic_number).collect()
}

pub struct Scripted {
    pub decision: BettingDecision,
    pub discards: Vec<usize>,
}

impl Scripted {
    pub fn calls() -> Box<Self> {
        Box::new(Self {
            decision: BettingDecision::Call,
            discards: Vec::new(),
        })
    }

    pub fn boxed(decision: BettingDecision, discards: Vec<usize>) -> Box<Self> {
        Box::new(Self {
            decision,
            discards,
        })
    }
}

impl ComputerPolicy for Scripted {
    fn select_discards(&self, _hand: &[Card]) -> Vec<usize> {
        self.discards.clone()
    }

    fn decide_betting(
        &self,
        _player: &Player,
        _current_bet: u32,
        _pot: u32,
        _rng: &mut dyn RngCore,
    ) -> BettingDecision {
        self.decision
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

pub fn table(
    config: TableConfig,
    policy: Box<dyn ComputerPolicy>,
    mode: GameMode,
    names: &[&str],
    hands: &[[u8; 5]],
    then: &[u8],
) -> (GameManager, GameState) {
    let manager = GameManager::new(config, policy);
    let state = manager
        .initialize_game_with_deck(mode, names, stacked_deck(hands, then))
        .expect("valid table");
    (manager, state)
}

/// Two human seats, dealt and waiting for the first bet.
pub fn heads_up(hands: [[u8; 5]; 2], then: &[u8]) -> (GameManager, GameState) {
    let config = TableConfig {
        seed: Some(1),
        ..TableConfig::default()
    };
    let (manager, state) = table(
        config,
        Scripted::calls(),
        GameMode::Multiplayer,
        &["Ada", "Grace"],
        &hands,
        then,
    );
    let state = manager.try_deal_cards(&state).expect("deal");
    (manager, state)
}

pub fn assert_cards_accounted(state: &GameState) {
    let ids: Vec<CardId> = state.all_cards().map(Card::id).collect();
    assert_eq!(ids.len(), DECK_SIZE, "phase {:?}", state.phase());
    let unique: HashSet<CardId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE, "duplicate card in {:?}", state.phase());
}
