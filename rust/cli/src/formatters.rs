//! Text rendering of cards, hands and game snapshots for the terminal.
//!
//! Pure functions: they take engine values and return strings, so command
//! handlers decide where the output goes.
//!
//! ## Example
//!
//! ```rust
//! use elemental_engine::cards::Card;
//! use elemental_cli::formatters::format_card;
//!
//! let helium = Card::new(2, 3).unwrap();
//! assert_eq!(format_card(&helium), "He(2)");
//! ```

use elemental_engine::cards::{Card, ElementGroup};
use elemental_engine::game::{GamePhase, GameState};
use elemental_engine::hand::HandResult;
use elemental_engine::player::{Player, PlayerAction};

/// Symbol and atomic number, e.g. `Na(11)`.
pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// One-letter group tag used in hand listings.
pub fn group_tag(group: ElementGroup) -> char {
    match group {
        ElementGroup::Alkali => 'A',
        ElementGroup::AlkalineEarth => 'E',
        ElementGroup::Nonmetal => 'N',
        ElementGroup::NobleGas => 'G',
    }
}

/// Cards with their slot numbers so players can name discards:
/// `0:H(1)/N 1:He(2)/G ...`
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}/{}", i, format_card(c), group_tag(c.group())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Full House (score 6012)`
pub fn format_hand_result(result: &HandResult) -> String {
    format!("{} (score {})", result.rank_name, result.score)
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(Some(n)) => format!("raise {}", n),
        PlayerAction::Raise(None) => "raise".to_string(),
    }
}

pub fn format_phase(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Waiting => "Waiting",
        GamePhase::Dealing => "Dealing",
        GamePhase::FirstBetting => "First betting",
        GamePhase::Draw => "Draw",
        GamePhase::SecondBetting => "Second betting",
        GamePhase::Showdown => "Showdown",
        GamePhase::GameOver => "Game over",
    }
}

/// Name, chips and status flags of one seat.
pub fn format_player_line(player: &Player) -> String {
    let mut line = format!(
        "{} [{}] chips={} bet={}",
        player.name(),
        player.id(),
        player.chips(),
        player.current_bet()
    );
    if player.has_folded() {
        line.push_str(" (folded)");
    }
    line
}

/// Table header: phase, pot and the bet to match.
pub fn format_table(state: &GameState) -> String {
    format!(
        "== {} | pot {} | bet {} ==",
        format_phase(state.phase()),
        state.pot(),
        state.current_bet()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_engine::hand::evaluate_hand;

    fn cards(numbers: [u8; 5]) -> Vec<Card> {
        numbers
            .iter()
            .map(|&n| Card::new(n, 1).unwrap())
            .collect()
    }

    #[test]
    fn hand_lists_slots_and_groups() {
        let hand = cards([1, 2, 3, 4, 20]);
        assert_eq!(
            format_hand(&hand),
            "0:H(1)/N 1:He(2)/G 2:Li(3)/A 3:Be(4)/E 4:Ca(20)/E"
        );
    }

    #[test]
    fn hand_result_shows_rank_and_score() {
        let result = evaluate_hand(&cards([5, 6, 7, 8, 9]));
        assert_eq!(format_hand_result(&result), "Straight Flush (score 8009)");
    }

    #[test]
    fn actions_render_as_typed() {
        assert_eq!(format_action(&PlayerAction::Raise(Some(75))), "raise 75");
        assert_eq!(format_action(&PlayerAction::Raise(None)), "raise");
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
    }
}
