//! # elemental-ai: Computer Opponents for Element Card Poker
//!
//! Heuristic policies for computer-controlled seats. A policy decides which
//! cards to replace during the draw and whether to fold, call or raise.
//!
//! ## Core Components
//!
//! - [`Difficulty`] - Betting aggressiveness (easy, medium, hard)
//! - [`computer`] - The heuristic policy used by computer seats
//! - [`create_ai`] - Factory that boxes a policy for the game manager
//!
//! ## Quick Start
//!
//! ```rust
//! use elemental_ai::{create_ai, Difficulty};
//! use elemental_engine::engine::GameManager;
//! use elemental_engine::game::GameMode;
//!
//! let mut manager = GameManager::with_seed(42, create_ai(Difficulty::Hard));
//! let state = manager
//!     .initialize_game(GameMode::VsComputer, &["Ada"])
//!     .expect("one named player");
//! let state = manager.deal_cards(&state);
//! assert!(state.players()[1].is_computer());
//! ```

use std::fmt;
use std::str::FromStr;

use elemental_engine::policy::ComputerPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod computer;

pub use computer::ComputerAI;

/// How readily a computer seat raises with a strong hand. Discard choices
/// are the same at every level.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability of raising once a hand is judged strong.
    pub fn aggressiveness(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Factory for the computer policy handed to
/// [`elemental_engine::engine::GameManager`].
///
/// # Example
///
/// ```rust
/// use elemental_ai::{create_ai, Difficulty};
///
/// let ai = create_ai(Difficulty::Easy);
/// assert_eq!(ai.name(), "ComputerAI(easy)");
/// ```
pub fn create_ai(difficulty: Difficulty) -> Box<dyn ComputerPolicy> {
    Box::new(ComputerAI::new(difficulty))
}
