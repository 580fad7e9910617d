//! Deal command: seat a table, deal once and show every hand.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_hand_result};
use elemental_ai::create_ai;
use elemental_engine::engine::GameManager;
use elemental_engine::game::{GameMode, TableConfig};
use std::io::Write;

/// Handle the deal command.
///
/// Seats `players` named players (`Player 1`...), deals five cards each and
/// prints the hands with their evaluation, or the whole dealt snapshot as
/// JSON with `json`.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: u8,
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let table = TableConfig {
        seed: Some(seed),
        ..config.table_config(None)
    };
    let names: Vec<String> = (1..=players).map(|i| format!("Player {}", i)).collect();

    let mut manager = GameManager::new(table, create_ai(config.difficulty));
    let state = manager.initialize_game(GameMode::Multiplayer, &names)?;
    let state = manager.try_deal_cards(&state)?;

    if json {
        let display = serde_json::json!({
            "seed": seed,
            "state": state,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", seed)?;
    for p in state.players() {
        let result = p
            .hand_result()
            .map(format_hand_result)
            .unwrap_or_default();
        writeln!(out, "{}: {}  {}", p.name(), format_hand(p.hand()), result)?;
    }
    writeln!(out, "Deck remaining: {}", state.deck().remaining())?;
    Ok(())
}
