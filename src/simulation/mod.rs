//! Whole-game drivers: AI-vs-AI games, per-move cost metrics and the
//! pruning benchmark.

mod benchmark;
mod metrics;
mod runner;

pub use benchmark::{run_benchmark, BenchmarkReport};
pub use metrics::{BatchSummary, GameRecord, MoveMetrics, PlayerMetrics, PlayerSummary};
pub use runner::{build_agents, play_game, run_batch, run_games, simulate_game};
