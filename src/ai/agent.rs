use rand::rngs::StdRng;
use rand::SeedableRng;

use super::difficulty::{Difficulty, MinimaxPlayer, MoveChoice};
use crate::config::EngineConfig;
use crate::error::SelectError;
use crate::game::{GameResult, GameState, Player};

/// Common interface for anything that can pick a column in a running game.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    fn select_move(&mut self, state: &GameState) -> Result<MoveChoice, SelectError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Reject finished games the same way the minimax player does.
pub(crate) fn ensure_in_progress(state: &GameState) -> Result<(), SelectError> {
    match state.result() {
        GameResult::InProgress => Ok(()),
        GameResult::Win(winner) => Err(SelectError::GameAlreadyWon { winner }),
        GameResult::Draw => Err(SelectError::NoLegalMoves),
    }
}

/// A [`MinimaxPlayer`] with its own random source.
pub struct MinimaxAgent {
    player: MinimaxPlayer,
    rng: StdRng,
    name: String,
}

impl MinimaxAgent {
    pub fn new(piece: Player, difficulty: Difficulty, engine: &EngineConfig) -> Self {
        Self::with_rng(piece, difficulty, engine, StdRng::from_os_rng())
    }

    /// Reproducible agent: the same seed yields the same moves.
    pub fn with_seed(piece: Player, difficulty: Difficulty, engine: &EngineConfig, seed: u64) -> Self {
        Self::with_rng(piece, difficulty, engine, StdRng::seed_from_u64(seed))
    }

    fn with_rng(piece: Player, difficulty: Difficulty, engine: &EngineConfig, rng: StdRng) -> Self {
        let player = MinimaxPlayer::new(piece, difficulty, engine);
        let mut name = format!("Minimax ({}, depth {}", player.difficulty(), player.depth());
        if !player.pruning() {
            name.push_str(", no pruning");
        }
        name.push(')');
        MinimaxAgent { player, rng, name }
    }

    pub fn piece(&self) -> Player {
        self.player.piece()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Result<MoveChoice, SelectError> {
        ensure_in_progress(state)?;
        self.player
            .select_move(state.board(), state.last_move(), &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EngineConfig {
        EngineConfig {
            depth: 3,
            pruning: true,
        }
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(Player::One, Difficulty::Hard, &engine());
        let state = GameState::initial();
        let legal = state.legal_actions();
        let choice = agent.select_move(&state).unwrap();
        assert!(legal.contains(&choice.column));
        assert!(choice.searched);
    }

    #[test]
    fn seeded_agents_are_reproducible() {
        let mut state = GameState::initial();
        let mut a = MinimaxAgent::with_seed(Player::One, Difficulty::Medium, &engine(), 17);
        let mut b = MinimaxAgent::with_seed(Player::One, Difficulty::Medium, &engine(), 17);
        for _ in 0..5 {
            let first = a.select_move(&state).unwrap();
            let second = b.select_move(&state).unwrap();
            assert_eq!(first.column, second.column);
            assert_eq!(first.nodes, second.nodes);
            state = state.apply_move(first.column).unwrap();
        }
    }

    #[test]
    fn refuses_finished_game() {
        let mut state = GameState::initial();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state = state.apply_move(col).unwrap();
        }
        let mut agent = MinimaxAgent::with_seed(Player::Two, Difficulty::Hard, &engine(), 1);
        assert_eq!(
            agent.select_move(&state),
            Err(SelectError::GameAlreadyWon {
                winner: Player::One
            })
        );
    }

    #[test]
    fn name_describes_settings() {
        let agent = MinimaxAgent::new(Player::Two, Difficulty::Easy, &engine());
        assert_eq!(agent.name(), "Minimax (easy, depth 3)");
        assert_eq!(agent.piece(), Player::Two);

        let engine = EngineConfig {
            depth: 0,
            pruning: false,
        };
        let agent = MinimaxAgent::new(Player::One, Difficulty::Hard, &engine);
        assert_eq!(agent.name(), "Minimax (hard, depth 1, no pruning)");
    }
}
