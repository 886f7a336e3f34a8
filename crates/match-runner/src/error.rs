//! Error types for the match runner crate.

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum MatchRunnerError {
    /// Configuration validation error
    Config(String),
    /// Game ended in a state the runner cannot account for
    Game(String),
}

impl fmt::Display for MatchRunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRunnerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            MatchRunnerError::Game(msg) => write!(f, "Game error: {msg}"),
        }
    }
}

impl Error for MatchRunnerError {}

/// Convenience type alias for Results with MatchRunnerError.
pub type Result<T> = std::result::Result<T, MatchRunnerError>;
