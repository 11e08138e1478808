//! Win and draw detection anchored at the most recently played cell.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Direction, Position};
use super::Player;

/// Number of connected pieces needed to win.
pub const CONNECT: usize = 4;

/// Outcome of a position, derived from the board and the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Run-length tracker over a line of cells.
#[derive(Default)]
struct Streak {
    owner: Option<Player>,
    len: usize,
}

impl Streak {
    /// Feed the next cell; returns the owner once a run reaches [`CONNECT`].
    fn push(&mut self, cell: Cell) -> Option<Player> {
        match cell.owner() {
            None => *self = Streak::default(),
            Some(owner) if self.owner == Some(owner) => self.len += 1,
            Some(owner) => {
                self.owner = Some(owner);
                self.len = 1;
            }
        }
        if self.len >= CONNECT {
            self.owner
        } else {
            None
        }
    }
}

/// First cell of the full line through `anchor` along `direction`.
///
/// Diagonal starts are found by sliding back from the anchor to the nearest
/// edge: `min(col, rows - 1 - row)` steps for the rising diagonal and
/// `min(col, row)` steps for the falling one.
pub fn line_start(board: &Board, anchor: Position, direction: Direction) -> Position {
    let Position { row, col } = anchor;
    match direction {
        Direction::Horizontal => Position::new(row, 0),
        Direction::Vertical => Position::new(0, col),
        Direction::Rising => {
            let offset = col.min((board.rows() - 1).saturating_sub(row));
            Position::new(row + offset, col - offset)
        }
        Direction::Falling => {
            let offset = col.min(row);
            Position::new(row - offset, col - offset)
        }
    }
}

/// Scan the full line starting at `start` for a run of [`CONNECT`] pieces.
fn scan_line(board: &Board, start: Position, direction: Direction) -> Option<Player> {
    let mut streak = Streak::default();
    board.line(start, direction).find_map(|cell| streak.push(cell))
}

/// Check whether the row, column or either diagonal through the last move
/// holds four connected pieces, returning their owner.
///
/// With no last move (empty board) there is nothing to check. Each line is
/// scanned end to end, in the order row, column, rising, falling; the first
/// hit wins. An anchor outside the board never wins.
pub fn check_win(board: &Board, last_move: Option<Position>) -> Option<Player> {
    let anchor = last_move?;
    board.try_get(anchor.row, anchor.col)?;
    Direction::ALL
        .iter()
        .find_map(|&direction| scan_line(board, line_start(board, anchor, direction), direction))
}

/// Classify the position: a win through the last move first, then a draw if
/// the board is full.
pub fn game_result(board: &Board, last_move: Option<Position>) -> GameResult {
    if let Some(winner) = check_win(board, last_move) {
        GameResult::Win(winner)
    } else if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
