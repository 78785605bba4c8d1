use std::fmt;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8, // 0-2
    pub col: u8, // 0-2
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index of this position, 0 for the top-left cell.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Every position in row-major order: row 0 first, columns ascending.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
