//! Uniform random-move engine.
//!
//! Used for diagnostics and as a zero-strength opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, SearchParams};
use crate::errors::EngineError;
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if name.eq_ignore_ascii_case("seed") {
            self.rng = StdRng::seed_from_u64(parse_seed(name, value)?);
            Ok(())
        } else {
            Err(EngineError::UnknownOption(name.to_owned()))
        }
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let legal_moves = game_state.all_legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        debug!(
            side = %game_state.side_to_move(),
            candidates = legal_moves.len(),
            chosen = ?out.best_move.map(|mv| (mv.from.to_algebraic(), mv.to.to_algebraic())),
            "random engine decision"
        );
        Ok(out)
    }
}
