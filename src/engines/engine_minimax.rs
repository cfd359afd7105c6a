//! Minimax alpha-beta engine: the computer opponent.
//!
//! Owns its random generator so root shuffling and the fallback pick in
//! `search_root` are reproducible under a fixed seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput, SearchParams};
use crate::errors::EngineError;
use crate::game_state::chess_rules::DEFAULT_AI_SEARCH_DEPTH;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::HeuristicScorer;
use crate::search::minimax::search_root;

pub struct MinimaxEngine {
    default_depth: u8,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth: default_depth.max(1),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(default_depth: u8, seed: u64) -> Self {
        Self {
            default_depth: default_depth.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_AI_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if name.eq_ignore_ascii_case("depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|depth| *depth >= 1)
                .ok_or_else(|| EngineError::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.default_depth = depth;
            Ok(())
        } else if name.eq_ignore_ascii_case("seed") {
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
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        // The side being searched for is the aggressor in the evaluation.
        let scorer = HeuristicScorer::new(game_state.side_to_move());
        let result = search_root(game_state, &scorer, depth, &mut self.rng);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: result
                .best_move
                .filter(|_| result.best_score.is_finite())
                .map(|_| result.best_score),
            info_lines: Vec::new(),
        };

        out.info_lines.push(format!(
            "info depth {} nodes {} score {:.2}",
            depth, result.nodes, result.best_score
        ));
        if let Some(mv) = out.best_move {
            out.info_lines
                .push(format!("info string minimax_engine bestmove {}{}", mv.from, mv.to));
        }

        debug!(
            side = %game_state.side_to_move(),
            depth,
            nodes = result.nodes,
            score = result.best_score,
            best = ?out.best_move.map(|mv| (mv.from.to_algebraic(), mv.to.to_algebraic())),
            "minimax engine decision"
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::errors::EngineError;
    use crate::game_state::chess_types::Position;
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn finds_free_queen_capture() {
        let game =
            GameState::from_fen("K7/7k/8/5n2/3Q4/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::with_seed(1, 99);
        let out = engine
            .choose_move(&game, &SearchParams::default())
            .expect("engine should run");
        let mv = out.best_move.expect("black has moves");
        assert_eq!((mv.from, mv.to), (sq("f5"), sq("d4")));
        assert!(out.score.is_some());
        assert!(out.info_lines[0].starts_with("info depth 1"));
    }

    #[test]
    fn request_depth_overrides_default() {
        let game = GameState::new_game();
        let mut engine = MinimaxEngine::with_seed(3, 1);
        let out = engine
            .choose_move(&game, &SearchParams { depth: Some(1) })
            .expect("engine should run");
        assert!(out.info_lines[0].starts_with("info depth 1 nodes 21"));
    }

    #[test]
    fn seeded_engines_agree() {
        let game = GameState::new_game();
        let run = || {
            MinimaxEngine::with_seed(2, 2024)
                .choose_move(&game, &SearchParams::default())
                .expect("engine should run")
                .best_move
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn options_are_validated() {
        let mut engine = MinimaxEngine::with_seed(3, 0);
        engine
            .set_option("depth", "5")
            .expect("depth should be accepted");
        assert_eq!(engine.default_depth(), 5);
        assert!(matches!(
            engine.set_option("Depth", "0"),
            Err(EngineError::InvalidOptionValue { .. })
        ));
        assert!(engine.set_option("Seed", "17").is_ok());
        assert!(matches!(
            engine.set_option("Threads", "4"),
            Err(EngineError::UnknownOption(_))
        ));
    }

    #[test]
    fn mated_side_gets_no_move() {
        let game = GameState::from_fen("k7/1Q6/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = MinimaxEngine::with_seed(2, 0)
            .choose_move(&game, &SearchParams::default())
            .expect("engine should run");
        assert!(out.best_move.is_none());
        assert!(out.score.is_none());
    }
}
