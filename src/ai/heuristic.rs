use crate::game::{Board, Cell, Direction, Player, Position, CONNECT};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

pub const CENTER_WEIGHT: i32 = 4;
pub const THREE_OPEN_SCORE: i32 = 10;
pub const TWO_OPEN_SCORE: i32 = 5;

/// Default heuristic: a center-column bonus plus a score for every 4-cell
/// window that the evaluated player could still complete.
///
/// Only the evaluated player's windows count; the opponent's threats are not
/// subtracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(window: &[Cell], own_cell: Cell) -> i32 {
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let empty = window.iter().filter(|&&c| c == Cell::Empty).count();
        match (own, empty) {
            (3, 1) => THREE_OPEN_SCORE,
            (2, 2) => TWO_OPEN_SCORE,
            _ => 0,
        }
    }
}

/// Starting cells of every full line in `direction`, walking each board edge
/// the line can enter from.
pub fn line_starts(board: &Board, direction: Direction) -> Vec<Position> {
    let rows = board.rows();
    let cols = board.cols();
    match direction {
        Direction::Horizontal => (0..rows).map(|row| Position::new(row, 0)).collect(),
        Direction::Vertical => (0..cols).map(|col| Position::new(0, col)).collect(),
        Direction::Rising => (0..rows)
            .map(|row| Position::new(row, 0))
            .chain((1..cols).map(|col| Position::new(rows - 1, col)))
            .collect(),
        Direction::Falling => (0..cols)
            .rev()
            .map(|col| Position::new(0, col))
            .chain((1..rows).map(|row| Position::new(row, 0)))
            .collect(),
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();

        let center = board.center_col();
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count();
        let mut score = center_count as i32 * CENTER_WEIGHT;

        let mut line = Vec::with_capacity(board.rows().max(board.cols()));
        for direction in Direction::ALL {
            for start in line_starts(board, direction) {
                line.clear();
                line.extend(board.line(start, direction));
                score += line
                    .windows(CONNECT)
                    .map(|window| Self::score_window(window, own_cell))
                    .sum::<i32>();
            }
        }

        score
    }
}
