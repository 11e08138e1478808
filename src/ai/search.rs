use rand::Rng;
use serde::{Deserialize, Serialize};

use super::heuristic::{Heuristic, WindowHeuristic};
use crate::game::{check_win, Board, Player, Position};

/// Node accounting for a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Score of a searched node and, for interior nodes, the column that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// `f64::INFINITY` for a forced win, `f64::NEG_INFINITY` for a forced
    /// loss, otherwise a heuristic value (0 for a draw).
    pub score: f64,
    pub best_move: Option<usize>,
}

impl SearchOutcome {
    fn leaf(score: f64) -> Self {
        SearchOutcome {
            score,
            best_move: None,
        }
    }
}

/// Per-call state threaded through the recursion: the random source used for
/// tie-breaking and the node counter.
pub struct SearchContext<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    stats: SearchStats,
}

impl<'r, R: Rng + ?Sized> SearchContext<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        SearchContext {
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Depth-limited minimax with optional alpha-beta pruning, searching on behalf
/// of one piece.
pub struct Minimax {
    piece: Player,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new(piece: Player, pruning: bool) -> Self {
        Minimax {
            piece,
            pruning,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(piece: Player, pruning: bool, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            piece,
            pruning,
            heuristic,
        }
    }

    /// The piece this search maximizes for.
    pub fn piece(&self) -> Player {
        self.piece
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Search from the root with an open window, the maximizing side to move.
    pub fn search_root<R: Rng + ?Sized>(
        &self,
        board: &Board,
        depth: u32,
        last_move: Option<Position>,
        rng: &mut R,
    ) -> (SearchOutcome, SearchStats) {
        let mut ctx = SearchContext::new(rng);
        let outcome = self.search(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            last_move,
            &mut ctx,
        );
        (outcome, ctx.stats())
    }

    /// Score `board` looking `depth` plies ahead.
    ///
    /// `last_move` anchors win detection for the move that produced `board`.
    /// Every call counts one node. Columns are tried in ascending order; the
    /// best move starts as a random legal column and only changes on a strict
    /// improvement.
    #[allow(clippy::too_many_arguments)]
    pub fn search<R: Rng + ?Sized>(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        last_move: Option<Position>,
        ctx: &mut SearchContext<'_, R>,
    ) -> SearchOutcome {
        ctx.stats.nodes += 1;

        if let Some(winner) = check_win(board, last_move) {
            return if winner == self.piece {
                SearchOutcome::leaf(f64::INFINITY)
            } else {
                SearchOutcome::leaf(f64::NEG_INFINITY)
            };
        }

        let legal = board.legal_moves();
        if legal.is_empty() {
            return SearchOutcome::leaf(0.0);
        }

        if depth == 0 {
            let score = self.heuristic.evaluate(board, self.piece);
            return SearchOutcome::leaf(f64::from(score));
        }

        let mover = if maximizing {
            self.piece
        } else {
            self.piece.other()
        };
        let mut best_move = legal[ctx.rng.random_range(0..legal.len())];
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for &col in &legal {
            let Ok((child, row)) = board.apply_move(col, mover) else {
                continue;
            };
            let score = self
                .search(
                    &child,
                    depth - 1,
                    alpha,
                    beta,
                    !maximizing,
                    Some(Position::new(row, col)),
                    ctx,
                )
                .score;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = col;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = col;
                }
                beta = beta.min(best_score);
            }

            if self.pruning && alpha >= beta {
                break;
            }
        }

        SearchOutcome {
            score: best_score,
            best_move: Some(best_move),
        }
    }
}
