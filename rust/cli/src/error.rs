//! Error types for the CLI application.
//!
//! Command handlers return `Result<(), CliError>` and use `?` on I/O,
//! configuration and engine errors; [`crate::run`] maps the result to an
//! exit code.

use elemental_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, stdin reads, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An intent the engine refused
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// Engine state the command cannot continue from
    #[error("Engine error: {0}")]
    Engine(String),

    /// Input closed before the command finished
    #[error("Interrupted: {0}")]
    Interrupted(String),
}
