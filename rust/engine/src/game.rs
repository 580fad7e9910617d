use serde::Serialize;

use crate::cards::Card;
use crate::deck::Deck;
use crate::player::{Player, PlayerId, DEFAULT_RAISE, STARTING_CHIPS};

/// Who sits at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// One human seat playing alone against the deck
    Single,
    /// Named human seats plus one computer seat
    VsComputer,
    /// Hot-seat game between named human seats
    Multiplayer,
}

/// Stage of a single game. Phases only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Waiting,
    /// Transient; dealing happens inside a single transition
    Dealing,
    FirstBetting,
    Draw,
    SecondBetting,
    Showdown,
    GameOver,
}

impl GamePhase {
    pub fn is_betting(self) -> bool {
        matches!(self, GamePhase::FirstBetting | GamePhase::SecondBetting)
    }
}

/// Table-wide settings applied when a game is created.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct TableConfig {
    pub starting_chips: u32,
    pub default_raise: u32,
    /// Upper bound on named (human) players
    pub max_players: usize,
    /// Seed for the manager's generator; random when absent
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            default_raise: DEFAULT_RAISE,
            max_players: 4,
            seed: None,
        }
    }
}

/// Snapshot of one game. Every transition on
/// [`crate::engine::GameManager`] returns a new, independent value.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameState {
    pub(crate) mode: GameMode,
    pub(crate) phase: GamePhase,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) pot: u32,
    pub(crate) current_bet: u32,
    pub(crate) deck: Deck,
    /// Cards replaced during the draw, in the order they left the hands
    pub(crate) discards: Vec<Card>,
    pub(crate) winner: Option<PlayerId>,
}

impl GameState {
    pub(crate) fn new(mode: GameMode, players: Vec<Player>, deck: Deck) -> Self {
        Self {
            mode,
            phase: GamePhase::Waiting,
            players,
            current_player_index: 0,
            pot: 0,
            current_bet: 0,
            deck,
            discards: Vec::new(),
            winner: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn phase(&self) -> GamePhase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Every card the game accounts for: undealt, in hand, or discarded.
    /// Always the full deck, each card once.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .cards()
            .iter()
            .chain(self.players.iter().flat_map(|p| p.hand()))
            .chain(self.discards.iter())
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn winner_id(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref().and_then(|id| self.player(id))
    }

    /// Players still contesting the pot.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.has_folded())
    }

    /// Names of the human seats, in seat order.
    pub fn human_names(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| !p.is_computer())
            .map(|p| p.name().to_string())
            .collect()
    }

    pub(crate) fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// First seat that has not folded, falling back to seat 0.
    pub(crate) fn first_active_seat(&self) -> usize {
        self.players
            .iter()
            .position(|p| !p.has_folded())
            .unwrap_or(0)
    }
}
