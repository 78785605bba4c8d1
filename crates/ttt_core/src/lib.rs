// Core tic-tac-toe data model
pub mod board;
pub mod error;
pub mod lines;
pub mod moves;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, Cell, Mark, Placement};
pub use error::{BoardViolation, Error, Result};
pub use lines::LINES;
pub use moves::{Move, ScoredMove};
pub use position::Position;
