use ttt_core::{Board, Result, ScoredMove};

use crate::search::{best_move, score_moves};
use crate::status::{status, GameStatus};
use crate::EngineConfig;

/// What the engine has to say about one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub status: GameStatus,
    /// Present exactly when the game is still ongoing.
    pub best: Option<ScoredMove>,
}

impl Recommendation {
    pub fn summary(&self, config: &EngineConfig) -> String {
        let mut lines = vec![self.status.message(config.roles)];
        match self.best {
            Some(best) => {
                lines.push(format!("The value of the best move is: {}", best.score));
                lines.push(format!(
                    "The optimal move for {} is ROW: {} COL: {}",
                    config.roles.maximizer(),
                    best.position.row,
                    best.position.col
                ));
            }
            None => lines.push("No move is necessary.".to_string()),
        }
        lines.join("\n")
    }
}

/// Classifies boards and recommends moves for the configured maximizer.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: EngineConfig,
}

impl Advisor {
    pub fn new(config: EngineConfig) -> Self {
        Advisor { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches only when the status gate reports an ongoing game.
    pub fn advise(&self, board: &Board) -> Result<Recommendation> {
        board.validate(self.config.first_mover)?;
        let status = status(board, self.config.roles)?;

        let best = if status == GameStatus::Ongoing {
            let mut scratch = *board;
            Some(best_move(&mut scratch, &self.config)?)
        } else {
            log::info!("{}: no search needed", status.message(self.config.roles));
            None
        };

        Ok(Recommendation { status, best })
    }

    /// Every candidate move with its value, or nothing once the game is over.
    pub fn score_moves(&self, board: &Board) -> Result<Vec<ScoredMove>> {
        board.validate(self.config.first_mover)?;
        let status = status(board, self.config.roles)?;
        if status.is_terminal() {
            return Ok(Vec::new());
        }
        let mut scratch = *board;
        score_moves(&mut scratch, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_core::{Error, Position};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_ongoing_board_gets_a_move() {
        let rec = Advisor::default().advise(&board("XX-/OO-/---")).unwrap();
        assert_eq!(rec.status, GameStatus::Ongoing);
        assert_eq!(rec.best.map(|m| m.position), Position::new(0, 2));
    }

    #[test]
    fn test_terminal_boards_skip_search() {
        let advisor = Advisor::default();
        let drawn = advisor.advise(&board("XOX/XOO/OXX")).unwrap();
        assert_eq!(drawn, Recommendation { status: GameStatus::Draw, best: None });
        let won = advisor.advise(&board("XXX/OO-/---")).unwrap();
        assert_eq!(won.status, GameStatus::MarkAWon);
        assert!(won.best.is_none());
        assert!(advisor.score_moves(&board("XXX/OO-/---")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_board_is_reported() {
        let err = Advisor::default().advise(&board("XXX/OOO/---")).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard(_)));
    }

    #[test]
    fn test_summary_text() {
        let advisor = Advisor::default();
        let rec = advisor.advise(&Board::new()).unwrap();
        assert_eq!(
            rec.summary(advisor.config()),
            "The game is still ongoing.\n\
             The value of the best move is: 0\n\
             The optimal move for X is ROW: 0 COL: 0"
        );
        let drawn = advisor.advise(&board("XOX/XOO/OXX")).unwrap();
        assert_eq!(drawn.summary(advisor.config()), "The game is a tie!\nNo move is necessary.");
    }
}
