//! Error types shared by the core and engine crates

use thiserror::Error;

use crate::{Mark, Position};

/// The ways a board can break the rules of reachable play.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardViolation {
    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most one)")]
    PieceCounts { x_count: usize, o_count: usize },

    #[error("{first} moved first but has {first_count} marks against {other_count}")]
    FirstMoverBehind {
        first: Mark,
        first_count: usize,
        other_count: usize,
    },

    #[error("both X and O complete a line")]
    BothMarksWin,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardViolation),

    #[error("no move available: every cell is occupied")]
    NoMoveAvailable,

    #[error("board must have {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: Position },
}

pub type Result<T> = std::result::Result<T, Error>;
