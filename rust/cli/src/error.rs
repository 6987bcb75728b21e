//! Error types for the CLI application.
//!
//! Engine errors convert into [`CliError`] so command handlers can use `?`
//! throughout; [`crate::run`] maps every variant to exit code `2`.

use std::fmt;

use crate::config::ConfigError;
use handrank_engine::errors::{CardParseError, DealError, InvalidHand};

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<InvalidHand> for CliError {
    fn from(error: InvalidHand) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<CardParseError> for CliError {
    fn from(error: CardParseError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<DealError> for CliError {
    fn from(error: DealError) -> Self {
        CliError::Engine(error.to_string())
    }
}
