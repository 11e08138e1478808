use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::search::Minimax;
use crate::config::EngineConfig;
use crate::error::SelectError;
use crate::game::{check_win, Board, Player, Position};

/// How often the engine plays its searched move instead of a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that a move is computed by full search.
    pub fn search_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.4,
            Difficulty::Medium => 0.8,
            Difficulty::Hard => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy', 'medium' or 'hard')")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// A selected column plus the cost of finding it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub column: usize,
    /// Nodes visited by the search; 0 for a random move.
    pub nodes: u64,
    pub elapsed: Duration,
    /// False when the difficulty draw picked a random column.
    pub searched: bool,
    /// Root score of the search, if one ran.
    pub score: Option<f64>,
}

impl MoveChoice {
    pub fn random(column: usize) -> Self {
        MoveChoice {
            column,
            nodes: 0,
            elapsed: Duration::ZERO,
            searched: false,
            score: None,
        }
    }

    /// A column typed in by a person. Costs nothing, like a random move.
    pub fn manual(column: usize) -> Self {
        Self::random(column)
    }
}

/// Plays one piece at a fixed difficulty: each move either runs a full
/// minimax search or picks a uniformly random legal column.
pub struct MinimaxPlayer {
    search: Minimax,
    difficulty: Difficulty,
    depth: u32,
}

impl MinimaxPlayer {
    pub fn new(piece: Player, difficulty: Difficulty, engine: &EngineConfig) -> Self {
        MinimaxPlayer {
            search: Minimax::new(piece, engine.pruning),
            difficulty,
            depth: engine.depth.max(1),
        }
    }

    pub fn piece(&self) -> Player {
        self.search.piece()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn pruning(&self) -> bool {
        self.search.pruning()
    }

    /// Choose a column for this player's piece.
    ///
    /// `last_move` is the cell of the opponent's previous move, or `None`
    /// before the first move. Finished positions are rejected before any
    /// random draw: a full board reports [`SelectError::NoLegalMoves`].
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        last_move: Option<Position>,
        rng: &mut R,
    ) -> Result<MoveChoice, SelectError> {
        if let Some(anchor) = last_move {
            board.validate_anchor(anchor)?;
        }
        if let Some(winner) = check_win(board, last_move) {
            return Err(SelectError::GameAlreadyWon { winner });
        }
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }

        let draw: f64 = rng.random();
        if draw > self.difficulty.search_probability() {
            let column = legal[rng.random_range(0..legal.len())];
            tracing::debug!(
                piece = self.piece().name(),
                difficulty = %self.difficulty,
                column,
                "playing random move"
            );
            return Ok(MoveChoice::random(column));
        }

        let start = Instant::now();
        let (outcome, stats) = self.search.search_root(board, self.depth, last_move, rng);
        let elapsed = start.elapsed();
        let column = outcome.best_move.unwrap_or(legal[0]);

        tracing::debug!(
            piece = self.piece().name(),
            column,
            score = outcome.score,
            pruning = self.pruning(),
            nodes = stats.nodes,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "searched move"
        );

        Ok(MoveChoice {
            column,
            nodes: stats.nodes,
            elapsed,
            searched: true,
            score: Some(outcome.score),
        })
    }
}
