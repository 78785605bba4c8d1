//! The eight winning lines of the 3x3 board

use crate::Position;

const fn at(row: u8, col: u8) -> Position {
    Position { row, col }
}

/// Winning lines in evaluation order: rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_covered() {
        for pos in Position::all() {
            assert!(LINES.iter().any(|line| line.contains(&pos)), "{pos} not on any line");
        }
    }

    #[test]
    fn test_centre_sits_on_four_lines() {
        let centre = at(1, 1);
        assert_eq!(LINES.iter().filter(|line| line.contains(&centre)).count(), 4);
    }
}
