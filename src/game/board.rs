use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Parse the numeric encoding: 0 = empty, 1 = player one, 2 = player two.
    pub fn from_code(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::One),
            2 => Some(Cell::Two),
            _ => None,
        }
    }

    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// The four line orientations a connection can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Row decreases as column increases (`/`).
    Rising,
    /// Row increases as column increases (`\`).
    Falling,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Rising,
        Direction::Falling,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Rising => (-1, 1),
            Direction::Falling => (1, 1),
        }
    }
}

/// A rectangular Connect Four grid. Pieces obey gravity: within a column,
/// occupied cells always form a contiguous run ending at the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Build a board from rows of numeric piece codes, top row first.
    ///
    /// Rejects ragged grids, unknown piece values and pieces that float above
    /// an empty cell.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut board = Board::new(rows.len(), cols)?;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell =
                    Cell::from_code(value).ok_or(BoardError::UnknownPiece { row, col, value })?;
                board.cells[row * cols + col] = cell;
            }
        }

        for col in 0..board.cols {
            for row in 0..board.rows - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the middle column (integer division).
    pub fn center_col(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Like [`Board::get`], but `None` outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.get(row, col))
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.try_get(row, col)
    }

    /// Cells from `start` stepping along `direction` until the edge of the board.
    pub fn line(&self, start: Position, direction: Direction) -> impl Iterator<Item = Cell> + '_ {
        let (d_row, d_col) = direction.delta();
        let origin = (start.row as isize, start.col as isize);
        std::iter::successors(Some(origin), move |&(r, c)| Some((r + d_row, c + d_col)))
            .map_while(move |(r, c)| self.cell_at(r, c))
    }

    /// Check that `position` names an occupied cell on this board.
    pub fn validate_anchor(&self, position: Position) -> Result<(), BoardError> {
        let Position { row, col } = position;
        match self.try_get(row, col) {
            None => Err(BoardError::AnchorOutOfBounds { row, col }),
            Some(Cell::Empty) => Err(BoardError::EmptyAnchor { row, col }),
            Some(_) => Ok(()),
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Lowest empty row; the top cell is known to be empty.
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .unwrap_or(0);
        self.cells[row * self.cols + col] = player.to_cell();
        Ok(row)
    }

    /// Return a copy of this board with `player`'s piece dropped in `col`,
    /// together with the row where it landed.
    pub fn apply_move(&self, col: usize, player: Player) -> Result<(Board, usize), MoveError> {
        let mut next = self.clone();
        let row = next.drop_piece(col, player)?;
        Ok((next, row))
    }

    /// Columns whose top cell is empty, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// True when no piece has been played.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.get(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.cols)
            .map(|col| char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
