use std::time::Duration;

use serde::Serialize;

use crate::ai::MoveChoice;
use crate::game::{Board, GameResult, Player};

/// Cost of one completed move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveMetrics {
    pub column: usize,
    pub nodes: u64,
    pub elapsed: Duration,
    pub searched: bool,
}

impl From<&MoveChoice> for MoveMetrics {
    fn from(choice: &MoveChoice) -> Self {
        MoveMetrics {
            column: choice.column,
            nodes: choice.nodes,
            elapsed: choice.elapsed,
            searched: choice.searched,
        }
    }
}

/// Ordered move records for one side of a game.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerMetrics {
    moves: Vec<MoveMetrics>,
}

impl PlayerMetrics {
    pub fn record(&mut self, metrics: MoveMetrics) {
        self.moves.push(metrics);
    }

    pub fn moves(&self) -> &[MoveMetrics] {
        &self.moves
    }

    /// Moves produced by a search; random moves carry no cost.
    pub fn searched_moves(&self) -> impl Iterator<Item = &MoveMetrics> {
        self.moves.iter().filter(|m| m.searched)
    }

    pub fn searched_count(&self) -> usize {
        self.searched_moves().count()
    }

    pub fn total_nodes(&self) -> u64 {
        self.moves.iter().map(|m| m.nodes).sum()
    }

    pub fn total_time(&self) -> Duration {
        self.moves.iter().map(|m| m.elapsed).sum()
    }

    /// Average nodes per searched move, 0 when nothing was searched.
    pub fn average_nodes(&self) -> f64 {
        let n = self.searched_count();
        if n == 0 {
            return 0.0;
        }
        self.total_nodes() as f64 / n as f64
    }

    /// Average search time per searched move.
    pub fn average_time(&self) -> Duration {
        let n = self.searched_count();
        if n == 0 {
            return Duration::ZERO;
        }
        self.total_time() / n as u32
    }
}

/// Everything recorded while playing one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub player_one: PlayerMetrics,
    pub player_two: PlayerMetrics,
    pub result: GameResult,
    /// Columns played, in order.
    pub columns: Vec<usize>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn new(board: Board) -> Self {
        GameRecord {
            player_one: PlayerMetrics::default(),
            player_two: PlayerMetrics::default(),
            result: GameResult::InProgress,
            columns: Vec::new(),
            final_board: board,
        }
    }

    pub fn record_move(&mut self, player: Player, choice: &MoveChoice) {
        self.columns.push(choice.column);
        self.metrics_for_mut(player).record(MoveMetrics::from(choice));
    }

    pub fn metrics_for(&self, player: Player) -> &PlayerMetrics {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    fn metrics_for_mut(&mut self, player: Player) -> &mut PlayerMetrics {
        match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        }
    }

    pub fn game_length(&self) -> usize {
        self.columns.len()
    }
}

/// Aggregated search cost for one side across a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub searched_moves: usize,
    pub random_moves: usize,
    pub total_nodes: u64,
    pub average_nodes: f64,
    pub average_time_ms: f64,
}

impl PlayerSummary {
    fn from_metrics<'a>(metrics: impl Iterator<Item = &'a PlayerMetrics>) -> Self {
        let mut summary = PlayerSummary::default();
        let mut total_time = Duration::ZERO;
        for player in metrics {
            summary.searched_moves += player.searched_count();
            summary.random_moves += player.moves().len() - player.searched_count();
            summary.total_nodes += player.total_nodes();
            total_time += player.total_time();
        }
        if summary.searched_moves > 0 {
            let n = summary.searched_moves as f64;
            summary.average_nodes = summary.total_nodes as f64 / n;
            summary.average_time_ms = total_time.as_secs_f64() * 1000.0 / n;
        }
        summary
    }
}

/// Results and search cost of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub average_game_length: f64,
    pub player_one: PlayerSummary,
    pub player_two: PlayerSummary,
}

impl BatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let count = |result: GameResult| records.iter().filter(|r| r.result == result).count();
        let average_game_length = if records.is_empty() {
            0.0
        } else {
            records.iter().map(GameRecord::game_length).sum::<usize>() as f64
                / records.len() as f64
        };

        BatchSummary {
            games: records.len(),
            player_one_wins: count(GameResult::Win(Player::One)),
            player_two_wins: count(GameResult::Win(Player::Two)),
            draws: count(GameResult::Draw),
            average_game_length,
            player_one: PlayerSummary::from_metrics(records.iter().map(|r| &r.player_one)),
            player_two: PlayerSummary::from_metrics(records.iter().map(|r| &r.player_two)),
        }
    }

    pub fn summary_for(&self, player: Player) -> &PlayerSummary {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searched(column: usize, nodes: u64, millis: u64) -> MoveChoice {
        MoveChoice {
            column,
            nodes,
            elapsed: Duration::from_millis(millis),
            searched: true,
            score: Some(0.0),
        }
    }

    #[test]
    fn averages_ignore_random_moves() {
        let mut metrics = PlayerMetrics::default();
        metrics.record(MoveMetrics::from(&searched(3, 100, 10)));
        metrics.record(MoveMetrics::from(&MoveChoice::random(0)));
        metrics.record(MoveMetrics::from(&searched(4, 300, 30)));

        assert_eq!(metrics.moves().len(), 3);
        assert_eq!(metrics.searched_count(), 2);
        assert_eq!(metrics.total_nodes(), 400);
        assert!((metrics.average_nodes() - 200.0).abs() < 1e-9);
        assert_eq!(metrics.average_time(), Duration::from_millis(20));
    }

    #[test]
    fn empty_metrics_average_to_zero() {
        let metrics = PlayerMetrics::default();
        assert_eq!(metrics.average_nodes(), 0.0);
        assert_eq!(metrics.average_time(), Duration::ZERO);
    }

    #[test]
    fn game_record_routes_moves_to_player() {
        let mut record = GameRecord::new(Board::default());
        record.record_move(Player::One, &searched(3, 50, 1));
        record.record_move(Player::Two, &MoveChoice::random(2));
        record.record_move(Player::One, &searched(3, 70, 1));

        assert_eq!(record.columns, vec![3, 2, 3]);
        assert_eq!(record.game_length(), 3);
        assert_eq!(record.metrics_for(Player::One).moves().len(), 2);
        assert_eq!(record.metrics_for(Player::Two).moves().len(), 1);
        assert_eq!(record.metrics_for(Player::One).total_nodes(), 120);
    }

    #[test]
    fn batch_summary_counts_results() {
        let mut win_one = GameRecord::new(Board::default());
        win_one.result = GameResult::Win(Player::One);
        win_one.record_move(Player::One, &searched(3, 10, 2));
        win_one.record_move(Player::Two, &searched(2, 30, 4));

        let mut draw = GameRecord::new(Board::default());
        draw.result = GameResult::Draw;
        draw.record_move(Player::One, &searched(0, 20, 2));
        draw.record_move(Player::Two, &MoveChoice::random(1));

        let summary = BatchSummary::from_records(&[win_one, draw]);
        assert_eq!(summary.games, 2);
        assert_eq!(summary.player_one_wins, 1);
        assert_eq!(summary.player_two_wins, 0);
        assert_eq!(summary.draws, 1);
        assert!((summary.average_game_length - 2.0).abs() < 1e-9);
        assert_eq!(summary.player_one.searched_moves, 2);
        assert!((summary.player_one.average_nodes - 15.0).abs() < 1e-9);
        assert!((summary.player_one.average_time_ms - 2.0).abs() < 1e-9);
        assert_eq!(summary.summary_for(Player::Two).searched_moves, 1);
        assert_eq!(summary.summary_for(Player::Two).random_moves, 1);
        assert!((summary.player_two.average_nodes - 30.0).abs() < 1e-9);
    }

    #[test]
    fn empty_batch_is_all_zero() {
        let summary = BatchSummary::from_records(&[]);
        assert_eq!(summary, BatchSummary::default());
    }
}
