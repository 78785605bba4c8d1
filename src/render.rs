use ttt_core::{Board, Mark, Position};

const ROW_DIVIDER: &str = "---+---+---";

/// Draws the board as a text grid. The cell at `highlight`, if any, shows
/// `mark` between asterisks, the way the recommended move is drawn onto
/// the board.
pub fn render(board: &Board, highlight: Option<(Position, Mark)>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::new(row, col))
            .map(|pos| match highlight {
                Some((target, mark)) if target == pos => format!("*{}*", mark),
                _ => format!(" {} ", board.get(pos).to_char()),
            })
            .collect();
        rows.push(cells.join("|"));
    }
    let divider = format!("\n{}\n", ROW_DIVIDER);
    rows.join(divider.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_grid() {
        let board: Board = "XO-/---/--X".parse().unwrap();
        assert_eq!(
            render(&board, None),
            " X | O | - \n---+---+---\n - | - | - \n---+---+---\n - | - | X "
        );
    }

    #[test]
    fn test_highlighted_move() {
        let board: Board = "XX-/OO-/---".parse().unwrap();
        let target = Position::new(0, 2).unwrap();
        let drawn = render(&board, Some((target, Mark::X)));
        assert_eq!(drawn.lines().next(), Some(" X | X |*X*"));
    }
}
