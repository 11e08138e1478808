//! Core Connect Four game logic: board representation, player types, win and
//! draw detection, and a game state machine with immutable transitions.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, Direction, Position, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::GameState;
pub use win::{check_win, game_result, line_start, GameResult, CONNECT};
