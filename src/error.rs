//! Error types.
//!
//! [`GoError`] covers construction-time failures: once a [`Board`] or a
//! [`Coord`] exists it is valid. [`MoveError`] explains why a proposed move
//! was rejected; it is an expected outcome of every turn, not a fault.
//!
//! [`Board`]: crate::board::Board
//! [`Coord`]: crate::coord::Coord

use crate::coord::Coord;

/// Failure to build a coordinate or a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("invalid board size {0}, expected 9, 13 or 19")]
    InvalidSize(usize),

    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

/// Reason a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("illegal move: {0} is not empty")]
    Occupied(Coord),

    #[error("illegal move: only black or white stones can be played")]
    NotAStone,

    #[error("illegal move: suicide at {0}")]
    Suicide(Coord),

    #[error("illegal move: {0} repeats a previous position")]
    Repetition(Coord),

    #[error("the game is over")]
    GameOver,
}
