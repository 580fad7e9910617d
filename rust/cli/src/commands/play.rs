//! # Play Command
//!
//! Hot-seat terminal game. Human seats are prompted in turn; the computer
//! seat moves through the engine's computer-turn operation.
//!
//! Betting prompts accept `fold`, `call` and `raise [n]`; draw prompts accept
//! `draw <slot>...`, `stand` and `fold`. `q` ends the session at any prompt.

use crate::cli::Mode;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    format_action, format_hand, format_hand_result, format_player_line, format_table,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_draw_command, parse_player_action, ParseResult};
use elemental_ai::{create_ai, Difficulty};
use elemental_engine::engine::GameManager;
use elemental_engine::game::{GameMode, GamePhase, GameState, TableConfig};
use elemental_engine::player::PlayerId;
use std::io::{BufRead, Write};
use tracing::info;

/// Everything `play` needs besides its streams.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub mode: Mode,
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
    pub rounds: u32,
}

enum RoundEnd {
    Finished(GameState),
    Quit,
}

/// Handle the play command.
///
/// Returns [`CliError::Interrupted`] when stdin closes mid-game and
/// [`CliError::InvalidInput`] for zero rounds or a bad seat list.
pub fn handle_play_command(
    opts: PlayOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let mode = GameMode::from(opts.mode);
    let names = if opts.players.is_empty() {
        default_names(mode)
    } else {
        opts.players
    };
    let difficulty = opts.difficulty.unwrap_or(config.difficulty);
    let seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);
    let table = TableConfig {
        seed: Some(seed),
        ..config.table_config(None)
    };

    writeln!(
        out,
        "play: mode={} seats={} seed={}",
        opts.mode.as_str(),
        names.len(),
        seed
    )?;
    if mode == GameMode::VsComputer {
        writeln!(out, "Computer difficulty: {}", difficulty)?;
    } else if opts.difficulty.is_some() {
        ui::display_warning(err, "--difficulty has no effect without a computer seat")?;
    }

    let mut manager = GameManager::new(table, create_ai(difficulty));
    let mut state = manager.initialize_game(mode, &names)?;

    let mut played = 0u32;
    for round in 1..=opts.rounds {
        writeln!(out, "--- Round {} ---", round)?;
        let dealt = manager.try_deal_cards(&state)?;
        state = match play_round(&mut manager, dealt, out, err, stdin)? {
            RoundEnd::Finished(s) => s,
            RoundEnd::Quit => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
        };
        write_showdown(&state, out)?;
        played += 1;

        if round < opts.rounds {
            state = manager.try_next_round(&state)?;
            if state.phase() == GamePhase::GameOver {
                writeln!(out, "Game over: fewer than two players have chips left.")?;
                break;
            }
        }
    }

    info!(rounds = played, "play session finished");
    writeln!(out, "Rounds played: {}", played)?;
    for p in state.players() {
        writeln!(out, "{}: {} chips", p.name(), p.chips())?;
    }
    Ok(())
}

fn default_names(mode: GameMode) -> Vec<String> {
    match mode {
        GameMode::Multiplayer => vec!["Player 1".to_string(), "Player 2".to_string()],
        GameMode::Single | GameMode::VsComputer => vec!["Player".to_string()],
    }
}

fn play_round(
    manager: &mut GameManager,
    mut state: GameState,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<RoundEnd, CliError> {
    loop {
        let phase = state.phase();
        if matches!(phase, GamePhase::Showdown | GamePhase::GameOver) {
            return Ok(RoundEnd::Finished(state));
        }
        if !phase.is_betting() && phase != GamePhase::Draw {
            return Err(CliError::Engine(format!(
                "cannot continue a round from phase {:?}",
                phase
            )));
        }
        let Some(seat) = state.current_player() else {
            return Err(CliError::Engine("table has no seats".to_string()));
        };

        if seat.is_computer() {
            let id = seat.id().clone();
            let next = manager.try_computer_turn(&state)?;
            writeln!(out, "{} {}", seat.name(), describe_move(&state, &next, &id))?;
            state = next;
            continue;
        }

        let id = seat.id().clone();
        writeln!(out, "{}", format_table(&state))?;
        writeln!(out, "{}", format_player_line(seat))?;
        writeln!(out, "  {}", format_hand(seat.hand()))?;
        if let Some(result) = seat.hand_result() {
            writeln!(out, "  {}", format_hand_result(result))?;
        }
        if phase.is_betting() {
            writeln!(out, "  to call: {}", seat.to_call(state.current_bet()))?;
            write!(out, "{}> fold/call/raise [n]/q: ", seat.name())?;
        } else {
            write!(out, "{}> draw <slot>.../stand/fold/q: ", seat.name())?;
        }
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted("input closed".to_string()));
        };
        let parsed = if phase.is_betting() {
            parse_player_action(&line)
        } else {
            parse_draw_command(&line)
        };

        let attempt = match parsed {
            ParseResult::Quit => return Ok(RoundEnd::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::Action(action) => {
                writeln!(out, "Action: {}", format_action(&action))?;
                manager.apply_action(&state, &id, action)
            }
            ParseResult::Draw(indices) => manager.apply_card_draw(&state, &id, &indices),
        };
        match attempt {
            Ok(next) => state = next,
            Err(e) => ui::write_error(err, &format!("Rejected: {}", e))?,
        }
    }
}

/// Narrates what the seat `id` did between two snapshots.
fn describe_move(before: &GameState, after: &GameState, id: &PlayerId) -> String {
    let (Some(was), Some(now)) = (before.player(id), after.player(id)) else {
        return "passes".to_string();
    };
    if now.has_folded() && !was.has_folded() {
        return "folds".to_string();
    }
    if before.phase() == GamePhase::Draw {
        let replaced = was
            .hand()
            .iter()
            .zip(now.hand())
            .filter(|(a, b)| a.id() != b.id())
            .count();
        return match replaced {
            0 => "stands pat".to_string(),
            1 => "draws 1 card".to_string(),
            n => format!("draws {} cards", n),
        };
    }
    if after.current_bet() > before.current_bet() {
        format!("raises to {}", after.current_bet())
    } else {
        "calls".to_string()
    }
}

fn write_showdown(state: &GameState, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "== Showdown | pot {} ==", state.pot())?;
    for p in state.players() {
        if p.has_folded() {
            writeln!(out, "{}: folded", p.name())?;
            continue;
        }
        let result = p
            .hand_result()
            .map(format_hand_result)
            .unwrap_or_default();
        writeln!(out, "{}: {}  {}", p.name(), format_hand(p.hand()), result)?;
    }
    match state.winner() {
        Some(w) => writeln!(out, "{} wins {} chips", w.name(), state.pot())?,
        None => writeln!(out, "No winner this round")?,
    }
    Ok(())
}
