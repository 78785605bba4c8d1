use ttt_core::{Board, BoardViolation, Error, Mark, Result};

use crate::Roles;

/// Score of a won position before depth discounting.
pub const WIN_SCORE: i32 = 10;

/// Scores a position for the maximizer: `WIN_SCORE` if the maximizer owns a
/// completed line, `-WIN_SCORE` if the minimizer does, 0 otherwise.
///
/// Lines are checked rows first, then columns, then diagonals. A board on
/// which both marks own a line cannot be scored and is rejected.
pub fn evaluate(board: &Board, roles: Roles) -> Result<i32> {
    if board.has_won(Mark::X) && board.has_won(Mark::O) {
        return Err(Error::InvalidBoard(BoardViolation::BothMarksWin));
    }
    Ok(line_score(board, roles))
}

/// `evaluate` without the two-winner check, for boards already validated.
pub(crate) fn line_score(board: &Board, roles: Roles) -> i32 {
    match board.completed_lines().next() {
        Some(owner) if owner == roles.maximizer() => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}
