//! Engine abstraction used by the game session.
//!
//! Defines the request parameters and output payload so the computer
//! opponent can be swapped at runtime behind a single trait object.

use crate::errors::EngineError;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Overrides the engine's own default depth for this request.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    /// Choose a move for the side to move in `game_state`. A position without
    /// legal moves yields `Ok` with `best_move: None`.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError>;
}

/// Parse a `Seed` option value.
pub(crate) fn parse_seed(name: &str, value: &str) -> Result<u64, EngineError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
