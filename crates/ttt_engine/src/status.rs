use ttt_core::{Board, Mark, Result};

use crate::evaluation::{evaluate, WIN_SCORE};
use crate::Roles;

/// Outcome of a position, relative to the configured roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    MarkAWon,
    MarkBWon,
    Draw,
    Ongoing,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self, roles: Roles) -> Option<Mark> {
        match self {
            GameStatus::MarkAWon => Some(roles.maximizer()),
            GameStatus::MarkBWon => Some(roles.minimizer()),
            GameStatus::Draw | GameStatus::Ongoing => None,
        }
    }

    pub fn message(self, roles: Roles) -> String {
        match (self, self.winner(roles)) {
            (_, Some(mark)) => format!("Player {} has won the game!", mark),
            (GameStatus::Draw, None) => "The game is a tie!".to_string(),
            _ => "The game is still ongoing.".to_string(),
        }
    }
}

/// Classifies a board. Wins take precedence over a full board.
pub fn status(board: &Board, roles: Roles) -> Result<GameStatus> {
    let status = match evaluate(board, roles)? {
        WIN_SCORE => GameStatus::MarkAWon,
        0 if board.is_full() => GameStatus::Draw,
        0 => GameStatus::Ongoing,
        _ => GameStatus::MarkBWon,
    };
    Ok(status)
}
