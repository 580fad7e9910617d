use thiserror::Error;

use crate::game::GamePhase;
use crate::player::PlayerId;

/// Why an intent was refused. The forgiving entry points on
/// [`crate::engine::GameManager`] log these and hand back the unchanged state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Action not allowed in phase {actual:?} (expected {expected})")]
    WrongPhase {
        expected: &'static str,
        actual: GamePhase,
    },
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} already acted this round")]
    AlreadyActed(PlayerId),
    #[error("Player {0} already folded")]
    PlayerFolded(PlayerId),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("Card index {0} is outside the hand")]
    InvalidCardIndex(usize),
    #[error("Card index {0} selected more than once")]
    DuplicateCardIndex(usize),
    #[error("Seat {0} is not computer controlled")]
    NotComputerSeat(PlayerId),
    #[error("Invalid player count: {count} (expected 1 to {max})")]
    InvalidPlayerCount { count: usize, max: usize },
    #[error("Player name for seat {seat} is empty")]
    EmptyPlayerName { seat: usize },
    #[error("Deck exhausted: needed {needed}, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
}
