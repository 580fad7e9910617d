//! Exit codes returned by [`crate::run`].

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad arguments, configuration, I/O or a refused game intent.
pub const ERROR: i32 = 2;

/// Input closed before an interactive command finished.
pub const INTERRUPTED: i32 = 130;
