//! # Referee Error Types
//!
//! Failures that stop the referee from scoring a player at all. Anything a
//! player does wrong *inside* the protocol is scored, not raised.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for referee operations.
pub type RefereeResult<T> = Result<T, RefereeError>;

#[derive(Debug, Error)]
pub enum RefereeError {
    /// The player command line was blank.
    #[error("Empty player command")]
    EmptyCommand,

    /// The player program could not be started.
    #[error("Failed to start player `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process came up without the pipe we asked for.
    #[error("Player has no {0} pipe")]
    MissingPipe(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
