//! # elemental-engine: Element Card Poker Core
//!
//! A five-card-draw poker variant played with an 80-card deck of chemical
//! elements (hydrogen through calcium, four copies each). The atomic number
//! is a card's face value and the element's chemical group is its suit.
//! Provides deck construction, hand evaluation and the game state machine,
//! with seeded RNG for reproducible games.
//!
//! ## Core Modules
//!
//! - [`cards`] - Element table, groups and card identity
//! - [`deck`] - Deck construction and seeded shuffling
//! - [`hand`] - Hand ranks, scoring and winner comparison
//! - [`player`] - Seats, actions and chip stacks
//! - [`game`] - Modes, phases, table settings and the state snapshot
//! - [`engine`] - [`engine::GameManager`], which owns every transition
//! - [`policy`] - The seam for computer-controlled seats
//! - [`errors`] - Why an intent was refused
//!
//! ## Quick Start
//!
//! ```rust
//! use elemental_engine::cards::Card;
//! use elemental_engine::hand::{evaluate_hand, HandRank};
//!
//! // Four hydrogens and a helium
//! let cards = [
//!     Card::new(1, 1).unwrap(),
//!     Card::new(1, 2).unwrap(),
//!     Card::new(1, 3).unwrap(),
//!     Card::new(1, 4).unwrap(),
//!     Card::new(2, 1).unwrap(),
//! ];
//!
//! let result = evaluate_hand(&cards);
//! assert_eq!(result.rank, HandRank::FourOfAKind);
//! assert_eq!(result.score, 7002);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use elemental_engine::deck::Deck;
//!
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1, deck2);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod policy;
