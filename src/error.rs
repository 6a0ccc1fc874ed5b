//! Error types.
//!
//! Illegal moves are not errors: they come back as
//! [`Rejection`](crate::engine::Rejection) values. The types here cover
//! malformed input from a frontend and invalid configuration.

use std::time::Duration;

/// Failure to parse a cell reference typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellParseError {
    /// Input was not an integer.
    #[error("not a cell number: {0:?}")]
    NotANumber(String),

    /// Integer does not name one of the nine cells.
    #[error("cell {0} is outside the board")]
    OutOfRange(usize),
}

/// Failure to parse a board pattern such as `"XXXOO____"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),

    #[error("invalid cell character {0:?} (expected X, O, _ or .)")]
    InvalidChar(char),
}

/// Invalid [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("think delay of {delay:?} exceeds the {max:?} ceiling")]
    ThinkDelayTooLong { delay: Duration, max: Duration },
}
