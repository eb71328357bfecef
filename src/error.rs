//! Error types for the tic-tac-toe engine

use thiserror::Error;

/// Main error type for the tic-tac-toe engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action ({row}, {col}): {reason}")]
    InvalidAction {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("illegal query: {operation} {reason}")]
    IllegalQuery {
        operation: &'static str,
        reason: String,
    },

    #[error("invalid board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid search strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("game already over")]
    GameOver,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn illegal_query(operation: &'static str, reason: impl Into<String>) -> Self {
        Error::IllegalQuery {
            operation,
            reason: reason.into(),
        }
    }
}
