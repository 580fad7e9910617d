use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::hand::{evaluate_hand, HandResult};

/// Default starting stack for each player in chips
pub const STARTING_CHIPS: u32 = 1000;

/// Default raise increment when a raise names no amount
pub const DEFAULT_RAISE: u32 = 50;

/// Seat identifier. Human seats are `player-<n>`, the computer seat is `computer`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn human(seat: usize) -> Self {
        PlayerId(format!("player-{}", seat))
    }

    pub fn computer() -> Self {
        PlayerId("computer".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

/// Represents a player intent during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum PlayerAction {
    /// Fold and forfeit the game
    Fold,
    /// Match the table's current bet, or as much of it as the stack allows
    Call,
    /// Put more chips in. `None` (or zero) uses the table's default raise.
    Raise(Option<u32>),
}

/// A seat at the table: identity, hand, chips and per-round flags.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    selected_cards: Vec<usize>,
    hand_result: Option<HandResult>,
    is_computer: bool,
    chips: u32,
    current_bet: u32,
    has_folded: bool,
    has_acted: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_computer: bool, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            selected_cards: Vec::new(),
            hand_result: None,
            is_computer,
            chips,
            current_bet: 0,
            has_folded: false,
            has_acted: false,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn selected_cards(&self) -> &[usize] {
        &self.selected_cards
    }
    pub fn hand_result(&self) -> Option<&HandResult> {
        self.hand_result.as_ref()
    }
    pub fn is_computer(&self) -> bool {
        self.is_computer
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }

    /// Chips still owed to match `table_bet`.
    pub fn to_call(&self, table_bet: u32) -> u32 {
        table_bet.saturating_sub(self.current_bet)
    }

    /// Installs a freshly dealt hand and clears per-round state.
    pub(crate) fn receive_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
        self.selected_cards.clear();
        self.current_bet = 0;
        self.has_folded = false;
        self.has_acted = false;
        self.refresh_hand_result();
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns how many actually moved.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.chips);
        self.chips -= moved;
        self.current_bet += moved;
        moved
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    pub(crate) fn toggle_selection(&mut self, index: usize) {
        if let Some(pos) = self.selected_cards.iter().position(|&i| i == index) {
            self.selected_cards.remove(pos);
        } else {
            self.selected_cards.push(index);
        }
    }

    /// Puts `card` into slot `index` and returns the card it displaced.
    /// Callers validate the index.
    pub(crate) fn replace_card(&mut self, index: usize, card: Card) -> Card {
        std::mem::replace(&mut self.hand[index], card)
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_cards.clear();
    }

    pub(crate) fn refresh_hand_result(&mut self) {
        self.hand_result = Some(evaluate_hand(&self.hand));
    }

    /// Returns the stored result, evaluating the hand first if none is stored.
    pub(crate) fn ensure_hand_result(&mut self) -> HandResult {
        *self
            .hand_result
            .get_or_insert_with(|| evaluate_hand(&self.hand))
    }

    /// Resets everything tied to one deal, keeping identity and chips.
    pub(crate) fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.selected_cards.clear();
        self.hand_result = None;
        self.current_bet = 0;
        self.has_folded = false;
        self.has_acted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_is_capped_by_stack() {
        let mut p = Player::new(PlayerId::human(0), "Ada", false, 30);
        assert_eq!(p.commit(50), 30);
        assert_eq!(p.chips(), 0);
        assert_eq!(p.current_bet(), 30);
        assert_eq!(p.to_call(100), 70);
    }

    #[test]
    fn toggle_selection_keeps_order() {
        let mut p = Player::new(PlayerId::computer(), "Computer", true, STARTING_CHIPS);
        p.toggle_selection(3);
        p.toggle_selection(1);
        p.toggle_selection(4);
        p.toggle_selection(1);
        assert_eq!(p.selected_cards(), &[3, 4]);
    }

    #[test]
    fn ids_follow_seat_convention() {
        assert_eq!(PlayerId::human(2).as_str(), "player-2");
        assert_eq!(PlayerId::computer().to_string(), "computer");
        assert_eq!(PlayerId::from("player-0"), PlayerId::human(0));
    }
}
