use rand::RngCore;
use serde::Serialize;

use crate::cards::Card;
use crate::player::Player;

/// What a computer seat wants to do in a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BettingDecision {
    Fold,
    Call,
    Raise,
}

/// Decision-making for computer-controlled seats.
///
/// The game manager is handed an implementation at construction time and
/// consults it only when it drives a computer seat; human seats never touch it.
/// Randomness comes from the manager's generator so a seeded manager replays
/// the same decisions.
///
/// # Example Implementation
///
/// ```rust
/// use elemental_engine::cards::Card;
/// use elemental_engine::player::Player;
/// use elemental_engine::policy::{BettingDecision, ComputerPolicy};
/// use rand::RngCore;
///
/// struct Calls;
///
/// impl ComputerPolicy for Calls {
///     fn select_discards(&self, _hand: &[Card]) -> Vec<usize> {
///         Vec::new()
///     }
///
///     fn decide_betting(
///         &self,
///         _player: &Player,
///         _current_bet: u32,
///         _pot: u32,
///         _rng: &mut dyn RngCore,
///     ) -> BettingDecision {
///         BettingDecision::Call
///     }
///
///     fn name(&self) -> &str {
///         "Calls"
///     }
/// }
/// ```
pub trait ComputerPolicy: Send + Sync {
    /// Hand slots (0..5) to replace during the draw, in replacement order.
    fn select_discards(&self, hand: &[Card]) -> Vec<usize>;

    /// Choose fold, call or raise given the table's bet to match and the pot.
    fn decide_betting(
        &self,
        player: &Player,
        current_bet: u32,
        pot: u32,
        rng: &mut dyn RngCore,
    ) -> BettingDecision;

    fn name(&self) -> &str;
}
