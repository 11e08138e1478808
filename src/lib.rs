//! # Minimax Connect Four
//!
//! A Connect Four engine that picks moves with depth-limited minimax search
//! and alpha-beta pruning, softened by per-player difficulty levels.
//!
//! ## Modules
//!
//! - [`game`]: board, players, win/draw detection and the game state machine
//! - [`ai`]: window heuristic, minimax search, difficulty policy and agents
//! - [`simulation`]: AI-vs-AI games, move metrics and the pruning benchmark
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod simulation;
