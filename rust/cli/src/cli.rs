//! Command-line surface, declared with clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use elemental_ai::Difficulty;
use elemental_engine::game::GameMode;

#[derive(Parser, Debug)]
#[command(
    name = "elemental",
    version,
    about = "Five-card draw poker played with chemical element cards"
)]
pub struct ElementalCli {
    /// Log engine and computer decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game in the terminal (hot-seat for human seats)
    Play {
        #[arg(long, value_enum, default_value_t = Mode::VsComputer)]
        mode: Mode,
        /// Human player name; repeat for more seats
        #[arg(long = "player", value_name = "NAME")]
        players: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Computer seat difficulty: easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Rounds to play at the same table
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Deal one game and print every hand with its evaluation
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
        players: u8,
        /// Print the dealt state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate five element symbols, e.g. `rank H H H H He`
    Rank {
        #[arg(required = true, num_args = 1.., value_name = "SYMBOL")]
        symbols: Vec<String>,
    },
    /// Pit a challenger policy against the computer seat over many games
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Difficulty of the computer seat
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Difficulty of the policy playing the named seat
        #[arg(long, default_value = "medium")]
        challenger: Difficulty,
    },
    /// Print the element table
    Elements,
    /// Print the resolved configuration with value sources
    Cfg,
}

/// Table mode as spelled on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    Single,
    VsComputer,
    Multiplayer,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::VsComputer => "vs-computer",
            Mode::Multiplayer => "multiplayer",
        }
    }
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => GameMode::Single,
            Mode::VsComputer => GameMode::VsComputer,
            Mode::Multiplayer => GameMode::Multiplayer,
        }
    }
}
