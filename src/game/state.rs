use super::win::{game_result, GameResult};
use super::{Board, Player, Position};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
    result: GameResult,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::start(Board::default())
    }

    /// Start a game on `board`, which must be empty. Player one moves first.
    pub fn with_board(board: Board) -> Result<Self, BoardError> {
        if !board.is_empty() {
            return Err(BoardError::NotEmpty);
        }
        Ok(Self::start(board))
    }

    fn start(board: Board) -> Self {
        GameState {
            result: game_result(&board, None),
            board,
            current_player: Player::One,
            last_move: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell where the previous move landed, `None` before the first move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_over()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (board, row) = self.board.apply_move(column, self.current_player)?;
        let last_move = Some(Position::new(row, column));

        Ok(GameState {
            result: game_result(&board, last_move),
            board,
            current_player: self.current_player.other(),
            last_move,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
