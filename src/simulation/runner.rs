use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::error::SimulationError;
use crate::game::{Board, GameState, Player};

use super::metrics::{BatchSummary, GameRecord};

/// Play one game to completion, alternating the two agents.
///
/// Each move's cost is recorded for the side that made it.
pub fn play_game(
    mut state: GameState,
    player_one: &mut dyn Agent,
    player_two: &mut dyn Agent,
) -> Result<GameRecord, SimulationError> {
    let mut record = GameRecord::new(state.board().clone());

    while !state.is_terminal() {
        let mover = state.current_player();
        let agent: &mut dyn Agent = match mover {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };
        let choice = agent.select_move(&state)?;

        let legal = state.legal_actions();
        if !legal.contains(&choice.column) {
            return Err(SimulationError::IllegalAction {
                column: choice.column,
                legal,
            });
        }

        state = state.apply_move(choice.column)?;
        record.record_move(mover, &choice);
    }

    record.result = state.result();
    record.final_board = state.board().clone();
    tracing::info!(
        result = ?record.result,
        moves = record.game_length(),
        "game finished"
    );
    Ok(record)
}

/// Build the two minimax agents described by `config`.
///
/// With a configured seed, game `index` derives its seeds from it so that
/// every game in a batch is distinct yet reproducible.
pub fn build_agents(config: &AppConfig, index: usize) -> (MinimaxAgent, MinimaxAgent) {
    let engine = &config.engine;
    let players = &config.players;
    match config.simulation.seed {
        Some(seed) => {
            let base = seed.wrapping_add(2 * index as u64);
            (
                MinimaxAgent::with_seed(Player::One, players.player_one, engine, base),
                MinimaxAgent::with_seed(Player::Two, players.player_two, engine, base.wrapping_add(1)),
            )
        }
        None => (
            MinimaxAgent::new(Player::One, players.player_one, engine),
            MinimaxAgent::new(Player::Two, players.player_two, engine),
        ),
    }
}

/// Play a single AI-vs-AI game using `config`.
pub fn simulate_game(config: &AppConfig) -> Result<GameRecord, SimulationError> {
    simulate_indexed(config, 0)
}

fn simulate_indexed(config: &AppConfig, index: usize) -> Result<GameRecord, SimulationError> {
    let (mut one, mut two) = build_agents(config, index);
    let board = Board::new(config.board.rows, config.board.cols)?;
    play_game(GameState::with_board(board)?, &mut one, &mut two)
}

/// Play `config.simulation.games` games and return every record.
pub fn run_games(config: &AppConfig) -> Result<Vec<GameRecord>, SimulationError> {
    (0..config.simulation.games)
        .map(|index| simulate_indexed(config, index))
        .collect()
}

/// Play a batch and aggregate it.
pub fn run_batch(config: &AppConfig) -> Result<BatchSummary, SimulationError> {
    let records = run_games(config)?;
    Ok(BatchSummary::from_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::ai::{Difficulty, HumanAgent, MoveChoice, RandomAgent};
    use crate::error::SelectError;
    use crate::game::GameResult;

    fn config(depth: u32, seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.engine.depth = depth;
        config.players.player_one = Difficulty::Hard;
        config.players.player_two = Difficulty::Hard;
        config.simulation.seed = Some(seed);
        config
    }

    #[test]
    fn full_game_completes_and_is_recorded() {
        let record = simulate_game(&config(2, 11)).unwrap();
        assert!(record.result.is_over());
        let one = record.metrics_for(Player::One).moves().len();
        let two = record.metrics_for(Player::Two).moves().len();
        assert_eq!(one + two, record.game_length());
        // Player one moves first, so it has the same number of moves or one more.
        assert!(one == two || one == two + 1);
        assert!(record.player_one.searched_moves().all(|m| m.nodes > 0));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let first = simulate_game(&config(2, 5)).unwrap();
        let second = simulate_game(&config(2, 5)).unwrap();
        assert_eq!(first.columns, second.columns);
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn minimax_beats_random() {
        let engine = config(3, 0).engine;
        let games = 10;
        let mut wins = 0;
        for seed in 0..games {
            let mut minimax = MinimaxAgent::with_seed(Player::One, Difficulty::Hard, &engine, seed);
            let mut random = RandomAgent::with_seed(seed + 100);
            let record = play_game(GameState::initial(), &mut minimax, &mut random).unwrap();
            if record.result == GameResult::Win(Player::One) {
                wins += 1;
            }
        }
        assert!(wins >= 8, "minimax won only {wins}/{games} games against random");
    }

    #[test]
    fn batch_plays_configured_number_of_games() {
        let mut config = config(1, 3);
        config.simulation.games = 3;
        let summary = run_batch(&config).unwrap();
        assert_eq!(summary.games, 3);
        assert_eq!(
            summary.player_one_wins + summary.player_two_wins + summary.draws,
            3
        );
    }

    #[test]
    fn small_board_ends_in_draw() {
        let mut config = config(3, 8);
        config.board.rows = 3;
        config.board.cols = 3;
        let record = simulate_game(&config).unwrap();
        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.game_length(), 9);
        assert!(record.final_board.is_full());
    }

    #[test]
    fn scripted_humans_play_a_game() {
        let script = |moves: &str| Cursor::new(moves.as_bytes().to_vec());
        let mut one = HumanAgent::new("Ann", script("0\n0\n0\n0\n"), Vec::new());
        let mut two = HumanAgent::new("Bo", script("1\n1\n1\n"), Vec::new());
        let record = play_game(GameState::initial(), &mut one, &mut two).unwrap();
        assert_eq!(record.result, GameResult::Win(Player::One));
        assert_eq!(record.columns, vec![0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(record.player_one.searched_count(), 0);
    }

    #[test]
    fn human_running_out_of_input_stops_the_game() {
        let mut human = HumanAgent::new("Ann", Cursor::new(b"3\n".to_vec()), Vec::new());
        let mut random = RandomAgent::with_seed(4);
        let err = play_game(GameState::initial(), &mut human, &mut random).unwrap_err();
        assert_eq!(err, SimulationError::Select(SelectError::InputClosed));
    }

    #[test]
    fn illegal_column_is_reported() {
        struct Stubborn;
        impl Agent for Stubborn {
            fn select_move(&mut self, _state: &GameState) -> Result<MoveChoice, SelectError> {
                Ok(MoveChoice::random(0))
            }
            fn name(&self) -> &str {
                "Stubborn"
            }
        }

        let state = GameState::with_board(Board::new(1, 2).unwrap()).unwrap();
        let err = play_game(state, &mut Stubborn, &mut Stubborn).unwrap_err();
        assert_eq!(
            err,
            SimulationError::IllegalAction {
                column: 0,
                legal: vec![1]
            }
        );
    }
}
