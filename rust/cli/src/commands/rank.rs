//! Rank command: evaluate five cards named by element symbol.

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::validation::parse_symbols;
use elemental_engine::hand::evaluate_hand;
use std::io::Write;

pub fn handle_rank_command(symbols: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_symbols(symbols).map_err(CliError::InvalidInput)?;
    let result = evaluate_hand(&cards);
    let high = cards
        .iter()
        .find(|c| c.atomic_number() == result.high_card)
        .map(format_card)
        .unwrap_or_default();

    writeln!(out, "Hand: {}", format_hand(&cards))?;
    writeln!(out, "Rank: {}", result.rank_name)?;
    writeln!(out, "High card: {}", high)?;
    writeln!(out, "Score: {}", result.score)?;
    Ok(())
}
