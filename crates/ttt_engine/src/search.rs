// Exhaustive minimax over a single board, explored in place with backtracking
use std::time::Instant;

use ttt_core::{Board, Error, Position, Result, ScoredMove};

use crate::evaluation::{line_score, WIN_SCORE};
use crate::{EngineConfig, Roles};

// Bounds that any real score beats
const ALPHA_INIT: i32 = -1000;
const BETA_INIT: i32 = 1000;

// Walks the game tree for one query and keeps count of what it visited
struct Searcher {
    roles: Roles,
    pruning: bool,
    nodes: u64,
    started: Instant,
}

impl Searcher {
    fn new(config: &EngineConfig) -> Self {
        Self {
            roles: config.roles,
            pruning: config.pruning,
            nodes: 0,
            started: Instant::now(),
        }
    }

    // Exact value of `board` with the given side to move
    fn score(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        if self.pruning {
            self.alpha_beta(board, depth, maximizing, ALPHA_INIT, BETA_INIT)
        } else {
            self.minimax(board, depth, maximizing)
        }
    }

    // Wins found sooner and losses found later score better
    fn terminal_score(&self, board: &Board, depth: u8) -> Option<i32> {
        let depth = i32::from(depth);
        match line_score(board, self.roles) {
            WIN_SCORE => Some(WIN_SCORE - depth),
            score if score == -WIN_SCORE => Some(-WIN_SCORE + depth),
            _ if board.is_full() => Some(0),
            _ => None,
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mark = self.roles.mark_for(maximizing);
        let mut best = if maximizing { ALPHA_INIT } else { BETA_INIT };
        for pos in Position::all() {
            let Ok(mut placed) = board.place(pos, mark) else {
                continue;
            };
            let score = self.minimax(&mut placed, depth + 1, !maximizing);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    // Fail-soft alpha-beta; exact whenever called with the full window
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mark = self.roles.mark_for(maximizing);
        let mut best = if maximizing { ALPHA_INIT } else { BETA_INIT };
        for pos in Position::all() {
            let Ok(mut placed) = board.place(pos, mark) else {
                continue;
            };
            let score = self.alpha_beta(&mut placed, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            // Dropping `placed` on the way out restores the cell
            if alpha >= beta {
                break;
            }
        }
        best
    }

    fn report(&self, query: &str) {
        log::debug!(
            "{} visited {} nodes in {:?} (pruning: {})",
            query,
            self.nodes,
            self.started.elapsed(),
            self.pruning
        );
    }
}

/// Minimax value of `board` for the configured maximizer.
///
/// `maximizing` says which side is to move and `depth` is the number of
/// plies already played in the line being searched; both feed the depth
/// discount, so a root query passes 0. The board is validated first and is
/// left exactly as it was found.
pub fn search(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    config: &EngineConfig,
) -> Result<i32> {
    board.validate(config.first_mover)?;
    let mut searcher = Searcher::new(config);
    let score = searcher.score(board, depth, maximizing);
    searcher.report("search");
    Ok(score)
}

/// Values of every move available to the maximizer, in row-major order.
///
/// Each value is the minimax score after the maximizer fills that cell with
/// the minimizer to reply.
pub fn score_moves(board: &mut Board, config: &EngineConfig) -> Result<Vec<ScoredMove>> {
    board.validate(config.first_mover)?;
    if board.is_full() {
        return Err(Error::NoMoveAvailable);
    }

    let mut searcher = Searcher::new(config);
    let mark = config.roles.maximizer();
    let mut scored = Vec::new();
    for pos in Position::all() {
        let Ok(mut placed) = board.place(pos, mark) else {
            continue;
        };
        let score = searcher.score(&mut placed, 0, false);
        scored.push(ScoredMove::new(pos, score));
    }
    searcher.report("score_moves");
    Ok(scored)
}

/// The optimal move for the maximizer.
///
/// Ties go to the move scanned first in row-major order. Fails with
/// [`Error::NoMoveAvailable`] on a full board.
pub fn best_move(board: &mut Board, config: &EngineConfig) -> Result<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in score_moves(board, config)? {
        if best.map_or(true, |current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }
    let best = best.ok_or(Error::NoMoveAvailable)?;
    log::debug!("best move for {}: {}", config.roles.maximizer(), best);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_core::Mark;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw_at_top_left() {
        let mut b = Board::new();
        let best = best_move(&mut b, &EngineConfig::default()).unwrap();
        assert_eq!(best, ScoredMove::new(pos(0, 0), 0));
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_immediate_win_beats_everything() {
        let mut b = board("XX-/OO-/---");
        let scored = score_moves(&mut b, &EngineConfig::default()).unwrap();
        let best = best_move(&mut b, &EngineConfig::default()).unwrap();
        assert_eq!(best, ScoredMove::new(pos(0, 2), WIN_SCORE));
        assert!(scored
            .iter()
            .filter(|m| m.position != pos(0, 2))
            .all(|m| m.score < WIN_SCORE));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let mut b = board("---/OO-/X--");
        let scored = score_moves(&mut b, &EngineConfig::default()).unwrap();
        let best = best_move(&mut b, &EngineConfig::default()).unwrap();
        assert_eq!(best.position, pos(1, 2));
        // Every other move lets O complete the middle row on the next ply
        for m in scored.iter().filter(|m| m.position != pos(1, 2)) {
            assert_eq!(m.score, -WIN_SCORE + 1, "move {}", m.position);
        }
        assert!(best.score > -WIN_SCORE + 1);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX/XOO/OXX");
        assert_eq!(best_move(&mut b, &EngineConfig::default()), Err(Error::NoMoveAvailable));
        assert_eq!(score_moves(&mut b, &EngineConfig::default()), Err(Error::NoMoveAvailable));
    }

    #[test]
    fn test_search_discounts_by_depth() {
        let config = EngineConfig::default();
        let mut won = board("XXX/OO-/---");
        assert_eq!(search(&mut won, 3, false, &config), Ok(WIN_SCORE - 3));
        let mut lost = board("OOO/XX-/X--");
        assert_eq!(search(&mut lost, 4, true, &config), Ok(-WIN_SCORE + 4));
        let mut drawn = board("XOX/XOO/OXX");
        assert_eq!(search(&mut drawn, 9, true, &config), Ok(0));
    }

    #[test]
    fn test_search_rejects_invalid_board() {
        let mut b = board("XXX/XX-/O--");
        assert!(matches!(
            search(&mut b, 0, true, &EngineConfig::default()),
            Err(Error::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_pruning_matches_plain_search() {
        let plain = EngineConfig::default();
        let pruned = EngineConfig::default().with_pruning(true);
        for s in ["---/---/---", "X--/-O-/---", "---/OO-/X--", "XO-/-X-/--O"] {
            let mut b = board(s);
            assert_eq!(
                best_move(&mut b, &plain).unwrap(),
                best_move(&mut b, &pruned).unwrap(),
                "board {s}"
            );
            assert_eq!(
                search(&mut b, 0, true, &plain).unwrap(),
                search(&mut b, 0, true, &pruned).unwrap(),
                "board {s}"
            );
            assert_eq!(b, board(s));
        }
    }

    #[test]
    fn test_swapped_roles_recommend_for_o() {
        let config = EngineConfig::new(Roles::new(Mark::O));
        let mut b = board("XX-/OO-/X--");
        let best = best_move(&mut b, &config).unwrap();
        assert_eq!(best, ScoredMove::new(pos(1, 2), WIN_SCORE));
    }

    #[test]
    fn test_first_mover_check_applies() {
        let config = EngineConfig::default().with_first_mover(Mark::X);
        let mut b = board("---/OO-/X--");
        assert!(matches!(best_move(&mut b, &config), Err(Error::InvalidBoard(_))));
    }
}
