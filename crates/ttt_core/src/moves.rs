use std::fmt;

use crate::Position;

/// A move names the empty cell to fill; the mark comes from whoever is to move.
pub type Move = Position;

/// A move together with the minimax value it yields for the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub position: Move,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(position: Move, score: i32) -> Self {
        Self { position, score }
    }
}

impl fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} scored {}", self.position, self.score)
    }
}
