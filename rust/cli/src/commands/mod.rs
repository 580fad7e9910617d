//! Command handler modules for the elemental CLI.
//!
//! Each subcommand lives in its own file and exposes
//! `handle_<command>_command(...) -> Result<(), CliError>`. Output streams
//! (and stdin for `play`) are passed in, so handlers are tested with
//! in-memory buffers.

pub mod cfg;
pub mod deal;
pub mod elements;
pub mod play;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use elements::handle_elements_command;
pub use play::{handle_play_command, PlayOptions};
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
