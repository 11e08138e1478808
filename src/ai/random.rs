use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{ensure_in_progress, Agent};
use super::difficulty::MoveChoice;
use crate::error::SelectError;
use crate::game::GameState;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Result<MoveChoice, SelectError> {
        ensure_in_progress(state)?;
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(MoveChoice::random(actions[idx]))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
