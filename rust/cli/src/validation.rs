//! Input parsing and validation for interactive commands.
//!
//! Handles betting intents (`fold`, `call`, `raise [n]`), draw commands
//! (`draw 0 3`, `stand`) and element symbol lists for `rank`.
//! Parsers return [`ParseResult`] so the caller can re-prompt on bad input.

use elemental_engine::cards::{element_by_symbol, Card, COPIES_PER_ELEMENT};
use elemental_engine::hand::HAND_SIZE;
use elemental_engine::player::PlayerAction;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Betting action, or a fold during the draw
    Action(PlayerAction),
    /// Hand slots to replace; empty stands pat
    Draw(Vec<usize>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a betting-round line.
///
/// Accepts (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c", "call", or "check" → Call
/// - "raise" → Raise with the table default, "raise X" → Raise X
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use elemental_cli::validation::{parse_player_action, ParseResult};
/// use elemental_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
/// assert_eq!(
///     parse_player_action("raise 120"),
///     ParseResult::Action(PlayerAction::Raise(Some(120)))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["q"] | ["quit"] => ParseResult::Quit,
        ["f"] | ["fold"] => ParseResult::Action(PlayerAction::Fold),
        ["c"] | ["call"] | ["check"] => ParseResult::Action(PlayerAction::Call),
        ["r"] | ["raise"] => ParseResult::Action(PlayerAction::Raise(None)),
        ["r", amount] | ["raise", amount] => match amount.parse::<u32>() {
            Ok(n) if n > 0 => ParseResult::Action(PlayerAction::Raise(Some(n))),
            _ => ParseResult::Invalid(format!("Invalid raise amount: {}", amount)),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Use fold, call or raise [amount]",
            input
        )),
    }
}

/// Parse a draw-phase line.
///
/// - "draw 0 3" (or "d 0 3") → replace slots 0 and 3, in that order
/// - "stand" or "s" → keep all five cards
/// - "fold" → fold out of the hand
/// - "q" or "quit" → Quit
///
/// Slots outside 0-4 and repeated slots are rejected here so the user can
/// re-enter the line.
pub fn parse_draw_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["q"] | ["quit"] => ParseResult::Quit,
        ["f"] | ["fold"] => ParseResult::Action(PlayerAction::Fold),
        ["s"] | ["stand"] => ParseResult::Draw(Vec::new()),
        ["d", slots @ ..] | ["draw", slots @ ..] => parse_slots(slots),
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use draw <slot>..., stand or fold",
            input
        )),
    }
}

fn parse_slots(slots: &[&str]) -> ParseResult {
    let mut indices = Vec::with_capacity(slots.len());
    for s in slots {
        let Ok(index) = s.parse::<usize>() else {
            return ParseResult::Invalid(format!("Invalid card slot: {}", s));
        };
        if index >= HAND_SIZE {
            return ParseResult::Invalid(format!(
                "Card slot {} is out of range (0-{})",
                index,
                HAND_SIZE - 1
            ));
        }
        if indices.contains(&index) {
            return ParseResult::Invalid(format!("Card slot {} given twice", index));
        }
        indices.push(index);
    }
    ParseResult::Draw(indices)
}

/// Turns five element symbols into cards, numbering repeated symbols as
/// successive copies.
///
/// # Example
///
/// ```rust
/// # use elemental_cli::validation::parse_symbols;
/// let cards = parse_symbols(&["h", "H", "he", "Li", "Ca"]).unwrap();
/// assert_eq!(cards[1].id().to_string(), "H-2");
/// assert!(parse_symbols(&["H", "He"]).is_err());
/// ```
pub fn parse_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Card>, String> {
    if symbols.len() != HAND_SIZE {
        return Err(format!(
            "Expected {} element symbols, got {}",
            HAND_SIZE,
            symbols.len()
        ));
    }
    let mut cards: Vec<Card> = Vec::with_capacity(HAND_SIZE);
    for symbol in symbols {
        let symbol = symbol.as_ref();
        let element =
            element_by_symbol(symbol).ok_or_else(|| format!("Unknown element '{}'", symbol))?;
        let copy = cards
            .iter()
            .filter(|c| c.atomic_number() == element.atomic_number)
            .count() as u8
            + 1;
        if copy > COPIES_PER_ELEMENT {
            return Err(format!(
                "At most {} copies of {} exist",
                COPIES_PER_ELEMENT, element.symbol
            ));
        }
        let card = Card::new(element.atomic_number, copy)
            .ok_or_else(|| format!("Unknown element '{}'", symbol))?;
        cards.push(card);
    }
    Ok(cards)
}
