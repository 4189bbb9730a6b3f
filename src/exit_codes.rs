//! Exit code constants for the ibsub CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable config, unparseable command)
//! - 2: Terminal failure (line editor could not be set up or read)
//! - 130: Interrupted by the user (Ctrl-C), matching the shell convention

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or syntax.
pub const USER_ERROR: i32 = 1;

/// The interactive terminal could not be driven.
pub const TERMINAL_FAILURE: i32 = 2;

/// Input was interrupted; no output was produced.
pub const INTERRUPTED: i32 = 130;
