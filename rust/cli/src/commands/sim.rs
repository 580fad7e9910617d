//! # Sim Command
//!
//! Computer-versus-computer games in vs-computer mode. A challenger
//! [`ComputerAI`] plays the named seat through the ordinary player intents
//! while the engine's own policy drives the computer seat.
//!
//! Game `g` uses seed `base + g`, so a run is reproducible from its base seed.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use elemental_ai::{create_ai, ComputerAI, Difficulty};
use elemental_engine::engine::GameManager;
use elemental_engine::errors::GameError;
use elemental_engine::game::{GameMode, GamePhase, GameState, TableConfig};
use elemental_engine::hand::HandRank;
use elemental_engine::player::{PlayerAction, PlayerId};
use elemental_engine::policy::{BettingDecision, ComputerPolicy};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::{debug, info};

const CHALLENGER: &str = "Challenger";

/// Upper bound on intents per game. A game needs at most six.
const MAX_STEPS: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub games: u32,
    pub challenger_wins: u32,
    pub computer_wins: u32,
    /// Winning hand ranks, indexed by [`HandRank::ordinal`]
    pub winning_ranks: [u32; 9],
}

/// Handle the sim command.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
    challenger: Difficulty,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let base_seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let computer = difficulty.unwrap_or(config.difficulty);

    writeln!(
        out,
        "sim: games={} seed={} challenger={} computer={}",
        games, base_seed, challenger, computer
    )?;
    let summary = run_simulation(games, base_seed, challenger, computer, config)?;

    writeln!(out, "Challenger ({}): {} wins", challenger, summary.challenger_wins)?;
    writeln!(out, "Computer ({}): {} wins", computer, summary.computer_wins)?;
    writeln!(out, "Winning hands:")?;
    for rank in HandRank::all() {
        let n = summary.winning_ranks[rank.ordinal() as usize];
        if n > 0 {
            writeln!(out, "  {}: {}", rank.name(), n)?;
        }
    }
    Ok(())
}

/// Plays `games` complete games and tallies winners and winning ranks.
pub fn run_simulation(
    games: u32,
    base_seed: u64,
    challenger: Difficulty,
    computer: Difficulty,
    config: &Config,
) -> Result<SimSummary, CliError> {
    let challenger_ai = ComputerAI::new(challenger);
    let mut challenger_rng = ChaCha20Rng::seed_from_u64(base_seed);
    let mut summary = SimSummary::default();

    for g in 0..games {
        let table = TableConfig {
            seed: Some(base_seed.wrapping_add(u64::from(g))),
            ..config.table_config(None)
        };
        let mut manager = GameManager::new(table, create_ai(computer));
        let state = manager.initialize_game(GameMode::VsComputer, &[CHALLENGER])?;
        let state = manager.try_deal_cards(&state)?;
        let state = play_out(&mut manager, state, &challenger_ai, &mut challenger_rng)?;

        summary.games += 1;
        if let Some(winner) = state.winner() {
            if winner.is_computer() {
                summary.computer_wins += 1;
            } else {
                summary.challenger_wins += 1;
            }
            if let Some(result) = winner.hand_result() {
                summary.winning_ranks[result.rank.ordinal() as usize] += 1;
            }
        }
        debug!(game = g, winner = ?state.winner_id(), pot = state.pot(), "sim game finished");
    }

    info!(
        games = summary.games,
        challenger_wins = summary.challenger_wins,
        computer_wins = summary.computer_wins,
        "simulation finished"
    );
    Ok(summary)
}

fn play_out(
    manager: &mut GameManager,
    mut state: GameState,
    challenger: &ComputerAI,
    rng: &mut ChaCha20Rng,
) -> Result<GameState, CliError> {
    for _ in 0..MAX_STEPS {
        if matches!(state.phase(), GamePhase::Showdown | GamePhase::GameOver) {
            return Ok(state);
        }
        let Some(seat) = state.current_player() else {
            return Err(CliError::Engine("table has no seats".to_string()));
        };
        state = if seat.is_computer() {
            manager.try_computer_turn(&state)?
        } else {
            let id = seat.id().clone();
            challenger_move(manager, &state, &id, challenger, rng)?
        };
    }
    Err(CliError::Engine(format!(
        "game still in {:?} after {} moves",
        state.phase(),
        MAX_STEPS
    )))
}

fn challenger_move(
    manager: &GameManager,
    state: &GameState,
    id: &PlayerId,
    challenger: &ComputerAI,
    rng: &mut ChaCha20Rng,
) -> Result<GameState, GameError> {
    let Some(player) = state.player(id) else {
        return Err(GameError::UnknownPlayer(id.clone()));
    };
    if state.phase() == GamePhase::Draw {
        let discards = challenger.select_discards(player.hand());
        return manager.apply_card_draw(state, id, &discards);
    }
    let action = match challenger.decide_betting(player, state.current_bet(), state.pot(), rng) {
        BettingDecision::Fold => PlayerAction::Fold,
        BettingDecision::Call => PlayerAction::Call,
        BettingDecision::Raise => PlayerAction::Raise(None),
    };
    manager.apply_action(state, id, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_summary() {
        let config = Config::default();
        let a = run_simulation(25, 9, Difficulty::Hard, Difficulty::Easy, &config).unwrap();
        let b = run_simulation(25, 9, Difficulty::Hard, Difficulty::Easy, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_game_is_counted() {
        let summary =
            run_simulation(40, 1, Difficulty::Medium, Difficulty::Medium, &Config::default())
                .unwrap();
        assert_eq!(summary.games, 40);
        let ranked: u32 = summary.winning_ranks.iter().sum();
        let won = summary.challenger_wins + summary.computer_wins;
        assert!(won <= 40);
        assert_eq!(ranked, won);
    }

    #[test]
    fn report_lists_both_seats() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(
            10,
            Some(5),
            Some(Difficulty::Easy),
            Difficulty::Hard,
            &Config::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("sim: games=10 seed=5 challenger=hard computer=easy\n"));
        assert!(output.contains("Challenger (hard): "));
        assert!(output.contains("Computer (easy): "));
        assert!(output.contains("Winning hands:"));
    }

    #[test]
    fn zero_games_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            0,
            None,
            None,
            Difficulty::Medium,
            &Config::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
