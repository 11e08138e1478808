use std::path::PathBuf;

use crate::game::Player;

/// Errors raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors raised when a board or a move anchor fails boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}: rows and columns must be > 0")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown piece value {value} at ({row}, {col})")]
    UnknownPiece { row: usize, col: usize, value: u8 },

    #[error("piece at ({row}, {col}) is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },

    #[error("last move ({row}, {col}) lies outside the board")]
    AnchorOutOfBounds { row: usize, col: usize },

    #[error("last move ({row}, {col}) points at an empty cell")]
    EmptyAnchor { row: usize, col: usize },

    #[error("a new game needs an empty board")]
    NotEmpty,
}

/// Errors raised by the move-selection entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal moves: the board is full and the game is a draw")]
    NoLegalMoves,

    #[error("game already won by {}", winner.name())]
    GameAlreadyWon { winner: Player },

    #[error("invalid position: {0}")]
    Board(#[from] BoardError),

    #[error("input closed before a move was chosen")]
    InputClosed,

    #[error("failed to read move: {0}")]
    Io(String),
}

/// Errors that can occur while driving a whole game between two agents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("agent selected illegal column {column} (legal: {legal:?})")]
    IllegalAction { column: usize, legal: Vec<usize> },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("move selection failed: {0}")]
    Select(#[from] SelectError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
