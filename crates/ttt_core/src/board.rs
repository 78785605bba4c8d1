use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::position::CELL_COUNT;
use crate::{BoardViolation, Error, Position, Result, LINES};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

/// One of the two marks a player can put down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 grid of cells stored in row-major order.
///
/// `Board` is `Copy`, but the search explores a single instance in place
/// through [`Board::place`], which hands out a [`Placement`] guard that puts
/// the cell back to empty when it goes out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for pos in Position::all() {
            board.cells[pos.index()] = rows[pos.row as usize][pos.col as usize];
        }
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    pub fn has_moves_left(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.has_moves_left()
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_empty(pos))
    }

    /// The mark owning `line`, if all three of its cells hold that mark.
    pub fn line_owner(&self, line: &[Position; 3]) -> Option<Mark> {
        let first = self.get(line[0]);
        if line[1..].iter().all(|&pos| self.get(pos) == first) {
            first.mark()
        } else {
            None
        }
    }

    /// Owners of completed lines, in row, column, diagonal order.
    pub fn completed_lines(&self) -> impl Iterator<Item = Mark> + '_ {
        LINES.iter().filter_map(move |line| self.line_owner(line))
    }

    pub fn has_won(&self, mark: Mark) -> bool {
        self.completed_lines().any(|owner| owner == mark)
    }

    /// Checks that the board could arise from legal play.
    ///
    /// Mark counts must differ by at most one and at most one mark may own a
    /// completed line. When `first_mover` is given, that mark must also have
    /// at least as many cells as its opponent.
    pub fn validate(&self, first_mover: Option<Mark>) -> Result<()> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);

        if x_count.abs_diff(o_count) > 1 {
            return Err(self.reject(BoardViolation::PieceCounts { x_count, o_count }));
        }

        if let Some(first) = first_mover {
            let first_count = self.count(first);
            let other_count = self.count(first.opponent());
            if first_count < other_count {
                return Err(self.reject(BoardViolation::FirstMoverBehind {
                    first,
                    first_count,
                    other_count,
                }));
            }
        }

        if self.has_won(Mark::X) && self.has_won(Mark::O) {
            return Err(self.reject(BoardViolation::BothMarksWin));
        }

        Ok(())
    }

    fn reject(&self, violation: BoardViolation) -> Error {
        log::debug!("rejecting board {:?}: {}", self.cells, violation);
        Error::InvalidBoard(violation)
    }

    /// Puts `mark` on an empty cell for good.
    pub fn play(&mut self, pos: Position, mark: Mark) -> Result<()> {
        if !self.is_empty(pos) {
            return Err(Error::CellOccupied { position: pos });
        }
        self.cells[pos.index()] = mark.to_cell();
        Ok(())
    }

    /// Puts `mark` on an empty cell until the returned guard is dropped.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<Placement<'_>> {
        self.play(pos, mark)?;
        Ok(Placement {
            board: self,
            position: pos,
        })
    }
}

/// A hypothetical mark on a borrowed board.
///
/// Dereferences to the board with the mark in place. Dropping the guard
/// empties the cell again, so the board is restored however the scope that
/// holds it is left.
#[must_use = "the mark is removed as soon as the placement is dropped"]
pub struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Placement<'_> {
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.index()] = Cell::Empty;
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cell symbols; whitespace, `/`, `|` and `,` are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|' | ','))
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position] = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                position,
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
