//! Move selection: the window heuristic, minimax search with alpha-beta
//! pruning, difficulty-weighted move choice, and the computer and human
//! agents built on them.

mod agent;
mod difficulty;
mod heuristic;
mod human;
mod random;
mod search;

pub use agent::{Agent, MinimaxAgent};
pub use difficulty::{Difficulty, MinimaxPlayer, MoveChoice, ParseDifficultyError};
pub use heuristic::{
    line_starts, Heuristic, WindowHeuristic, CENTER_WEIGHT, THREE_OPEN_SCORE, TWO_OPEN_SCORE,
};
pub use human::{HumanAgent, StdinLines};
pub use random::RandomAgent;
pub use search::{Minimax, SearchContext, SearchOutcome, SearchStats};
