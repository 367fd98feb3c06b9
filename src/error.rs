//! Error types for the minimax-ttt crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the minimax-ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game already over: {winner:?} has three in a row")]
    GameOver { winner: Player },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (X moves first)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("both players have three in a row in '{context}'")]
    ConflictingWinners { context: String },

    #[error("{agent} proposed {attempts} illegal moves in a row")]
    IllegalMoveLimit { agent: String, attempts: usize },

    #[error("input closed while waiting for {player:?}'s move")]
    InputClosed { player: Player },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
