//! Error types for the ibsub CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Recoverable conditions (bad input, missing completion data) never reach this
//! type; they are handled where they occur.

use crate::exit_codes;
use crate::output::Syntax;
use thiserror::Error;

/// Main error type for ibsub operations.
#[derive(Error, Debug)]
pub enum IbsubError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A script was requested in a syntax ibsub cannot produce.
    #[error(
        "invalid shell syntax '{value}', valid syntaxes are {choices}",
        choices = Syntax::quoted_choices()
    )]
    InvalidSyntax {
        /// The rejected syntax name.
        value: String,
    },

    /// The interactive terminal could not be set up or read.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// The user pressed Ctrl-C while a prompt was active.
    #[error("interrupted")]
    Interrupted,
}

impl IbsubError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            IbsubError::UserError(_) => exit_codes::USER_ERROR,
            IbsubError::InvalidSyntax { .. } => exit_codes::USER_ERROR,
            IbsubError::Terminal(_) => exit_codes::TERMINAL_FAILURE,
            IbsubError::Interrupted => exit_codes::INTERRUPTED,
        }
    }
}

/// Result type alias for ibsub operations.
pub type Result<T> = std::result::Result<T, IbsubError>;
