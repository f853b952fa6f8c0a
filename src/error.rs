//! Error types for the triqui crate

use thiserror::Error;

/// Main error type for the triqui crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("location {location} is out of bounds (must be 0-8)")]
    LocationOutOfBounds { location: usize },

    #[error("no open cell remains for the computer to play")]
    BoardFull,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
