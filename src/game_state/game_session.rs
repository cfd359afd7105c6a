//! Human-versus-computer session.
//!
//! Wraps the authoritative `GameState` with an engine and the side that
//! engine plays. After every accepted human move the engine is consulted
//! synchronously when it is the computer's turn.

use tracing::{debug, warn};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::chess_rules::DEFAULT_AI_SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::utils::game_record::write_game_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side played by the engine; `None` for two human players.
    pub computer_side: Option<Color>,
    pub ai_search_depth: u8,
    pub allow_illegal_moves: bool,
    /// Fixed seed for the engine's generator; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer_side: Some(Color::Black),
            ai_search_depth: DEFAULT_AI_SEARCH_DEPTH,
            allow_illegal_moves: false,
            seed: None,
        }
    }
}

pub struct GameSession {
    state: GameState,
    engine: Box<dyn Engine>,
    computer_side: Option<Color>,
}

impl GameSession {
    /// Fresh game against the minimax engine.
    pub fn new(config: SessionConfig) -> Self {
        let engine: Box<dyn Engine> = match config.seed {
            Some(seed) => Box::new(MinimaxEngine::with_seed(config.ai_search_depth, seed)),
            None => Box::new(MinimaxEngine::new(config.ai_search_depth)),
        };
        let mut state = GameState::new_game();
        state.set_allow_illegal_moves(config.allow_illegal_moves);
        state.set_ai_search_depth(config.ai_search_depth);
        Self::with_engine(state, engine, config.computer_side)
    }

    /// Session over an arbitrary position and engine. If the computer is to
    /// move it plays immediately.
    pub fn with_engine(
        state: GameState,
        engine: Box<dyn Engine>,
        computer_side: Option<Color>,
    ) -> Self {
        let mut session = Self {
            state,
            engine,
            computer_side,
        };
        session.play_computer_turn();
        session
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.state.white_to_move()
    }

    #[inline]
    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<&'static str> {
        self.state.winner()
    }

    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        self.state.legal_moves_from(from)
    }

    pub fn is_promotion(&self, from: Position, to: Position) -> bool {
        self.state.is_promotion(from, to)
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.state.in_check(color)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.state.king_position(color)
    }

    pub fn computer_side(&self) -> Option<Color> {
        self.computer_side
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Submit a human move. On acceptance the computer replies before this
    /// returns.
    pub fn move_piece(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> MoveResult {
        let result = self.state.make_move(from, to, promotion, false);
        if result.is_accepted() {
            self.play_computer_turn();
        } else {
            debug!(from = %from, to = %to, ?result, "move rejected");
        }
        result
    }

    pub fn set_allow_illegal_moves(&mut self, allow: bool) {
        self.state.set_allow_illegal_moves(allow);
    }

    pub fn set_ai_difficulty(&mut self, depth: u8) {
        self.state.set_ai_search_depth(depth);
    }

    pub fn set_computer_side(&mut self, side: Option<Color>) {
        self.computer_side = side;
        self.play_computer_turn();
    }

    pub fn reset_game(&mut self) {
        self.state.reset();
        self.engine.new_game();
        self.play_computer_turn();
    }

    pub fn game_record(&self) -> String {
        write_game_record(&self.state)
    }

    /// Let the engine move if it is the computer's turn. Engine failures are
    /// logged and leave the position for the human to continue.
    fn play_computer_turn(&mut self) {
        if self.state.is_game_over() || self.computer_side != Some(self.state.side_to_move()) {
            return;
        }

        let params = SearchParams {
            depth: Some(self.state.ai_search_depth()),
        };
        let output = match self.engine.choose_move(&self.state, &params) {
            Ok(output) => output,
            Err(err) => {
                warn!(engine = self.engine.name(), error = %err, "engine failed to choose a move");
                return;
            }
        };
        for line in &output.info_lines {
            debug!(engine = self.engine.name(), "{line}");
        }

        let Some(mv) = output.best_move else {
            return;
        };
        let result = self.state.make_move(mv.from, mv.to, mv.promotion, true);
        if !result.is_accepted() {
            warn!(from = %mv.from, to = %mv.to, ?result, "engine move rejected");
        }
    }
}
