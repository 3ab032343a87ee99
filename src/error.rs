//! Error types for calcdeck.
//!
//! Calculator input never fails: bad operands are coerced and division by
//! zero yields a non-finite value. These errors cover everything around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No history entry at index {0}")]
    HistoryIndex(usize),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand(input.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
