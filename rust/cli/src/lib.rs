//! # Elemental CLI Library
//!
//! Terminal front end for the element card poker engine: hot-seat play
//! against the computer seat, one-off deals, hand ranking, simulations and
//! configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, installs logging and dispatches to the
//! subcommand handler.
//!
//! ```
//! use std::io;
//! let args = vec!["elemental", "rank", "H", "H", "H", "H", "He"];
//! let code = elemental_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game in the terminal
//! - `deal`: Deal one game and show every hand
//! - `rank`: Evaluate five element symbols
//! - `sim`: Pit two computer policies against each other
//! - `elements`: Print the element table
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, ElementalCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_elements_command, handle_play_command,
    handle_rank_command, handle_sim_command, PlayOptions,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "rank", "sim", "elements", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// during `play`
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["elemental", "deal", "--seed", "42"];
/// let code = elemental_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ElementalCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Elemental Poker CLI");
    write_or_exit!(err, "Usage: elemental <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: elemental --help");
    exit_code::ERROR
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Elements => handle_elements_command(out),
        Commands::Rank { symbols } => handle_rank_command(&symbols, out),
        Commands::Deal {
            seed,
            players,
            json,
        } => {
            let config = config::load()?;
            handle_deal_command(seed, players, json, &config, out)
        }
        Commands::Play {
            mode,
            players,
            seed,
            difficulty,
            rounds,
        } => {
            let config = config::load()?;
            let opts = PlayOptions {
                mode,
                players,
                seed,
                difficulty,
                rounds,
            };
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opts, &config, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            difficulty,
            challenger,
        } => {
            let config = config::load()?;
            handle_sim_command(games, seed, difficulty, challenger, &config, out, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn elements_dispatch() {
        let (code, out, _) = run_args(&["elemental", "elements"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Hydrogen"));
    }

    #[test]
    fn rank_errors_map_to_exit_code_two() {
        let (code, out, err) = run_args(&["elemental", "rank", "H", "He"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert!(err.contains("Error: Invalid input: Expected 5 element symbols, got 2"));
    }

    #[test]
    fn unknown_command_prints_usage() {
        let (code, _, err) = run_args(&["elemental", "shuffle"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Usage: elemental <command> [options]"));
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["elemental", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }
}
