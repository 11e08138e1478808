use serde::Serialize;

use crate::config::AppConfig;
use crate::error::SimulationError;

use super::metrics::BatchSummary;
use super::runner::run_batch;

/// The same batch played twice, once per pruning mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub depth: u32,
    pub without_pruning: BatchSummary,
    pub with_pruning: BatchSummary,
}

impl BenchmarkReport {
    /// Ratio of average nodes per searched move, unpruned over pruned, for
    /// both players combined. `None` if the pruned batch searched nothing.
    pub fn node_reduction(&self) -> Option<f64> {
        let nodes = |s: &BatchSummary| s.player_one.total_nodes + s.player_two.total_nodes;
        let moves = |s: &BatchSummary| s.player_one.searched_moves + s.player_two.searched_moves;

        let pruned_moves = moves(&self.with_pruning);
        let full_moves = moves(&self.without_pruning);
        if pruned_moves == 0 || full_moves == 0 {
            return None;
        }
        let pruned = nodes(&self.with_pruning) as f64 / pruned_moves as f64;
        if pruned == 0.0 {
            return None;
        }
        let full = nodes(&self.without_pruning) as f64 / full_moves as f64;
        Some(full / pruned)
    }
}

/// Play `config.simulation.games` games without pruning, then the same
/// number with pruning. Everything else in `config` is shared.
pub fn run_benchmark(config: &AppConfig) -> Result<BenchmarkReport, SimulationError> {
    let mut config = config.clone();

    config.engine.pruning = false;
    tracing::info!(
        games = config.simulation.games,
        depth = config.engine.depth,
        "benchmark without pruning"
    );
    let without_pruning = run_batch(&config)?;

    config.engine.pruning = true;
    tracing::info!(
        games = config.simulation.games,
        depth = config.engine.depth,
        "benchmark with pruning"
    );
    let with_pruning = run_batch(&config)?;

    Ok(BenchmarkReport {
        depth: config.engine.depth,
        without_pruning,
        with_pruning,
    })
}
