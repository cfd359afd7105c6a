//! Authoritative rules state.
//!
//! `GameState` owns exactly one `Board` plus side to move, en-passant target,
//! notated history, outcome, the training toggle and the configured search
//! depth. It changes only through move application; snapshots are cheap
//! disjoint copies used for legality simulation and as search nodes.

use tracing::info;

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{DEFAULT_AI_SEARCH_DEPTH, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_internal;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, legal_moves_from,
};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Square passed over by the last two-square pawn advance; valid for the
    /// very next move only.
    pub(crate) en_passant_target: Option<Position>,
    pub(crate) history: Vec<String>,
    pub(crate) outcome: Outcome,
    pub(crate) allow_illegal_moves: bool,
    pub(crate) ai_search_depth: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting layout, White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White, None)
    }

    /// Position with no history, in progress, training mode off.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        en_passant_target: Option<Position>,
    ) -> Self {
        Self {
            board,
            side_to_move,
            en_passant_target,
            history: Vec::new(),
            outcome: Outcome::InProgress,
            allow_illegal_moves: false,
            ai_search_depth: DEFAULT_AI_SEARCH_DEPTH,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    /// Back to the starting layout. The training toggle and search depth are
    /// preferences and survive the reset.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.side_to_move = Color::White;
        self.en_passant_target = None;
        self.history.clear();
        self.outcome = Outcome::InProgress;
        info!("game reset");
    }

    /// Independent copy for simulation. History is not carried over.
    pub fn snapshot(&self) -> GameState {
        GameState {
            board: self.board.snapshot(),
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
            history: Vec::new(),
            outcome: self.outcome,
            allow_illegal_moves: self.allow_illegal_moves,
            ai_search_depth: self.ai_search_depth,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// "White", "Black", "Draw", or `None` while in progress.
    #[inline]
    pub fn winner(&self) -> Option<&'static str> {
        self.outcome.winner_label()
    }

    #[inline]
    pub fn allow_illegal_moves(&self) -> bool {
        self.allow_illegal_moves
    }

    pub fn set_allow_illegal_moves(&mut self, allow: bool) {
        self.allow_illegal_moves = allow;
    }

    #[inline]
    pub fn ai_search_depth(&self) -> u8 {
        self.ai_search_depth
    }

    /// Depth is clamped to at least one ply.
    pub fn set_ai_search_depth(&mut self, depth: u8) {
        self.ai_search_depth = depth.max(1);
    }

    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        legal_moves_from(self, from)
    }

    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        all_legal_moves(self)
    }

    /// True when the piece on `from` is a pawn and `to` is on its last rank.
    pub fn is_promotion(&self, from: Position, to: Position) -> bool {
        self.board.get(from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row()
        })
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Position, by: Color) -> bool {
        is_square_attacked(&self.board, square, by)
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.board.king_position(color)
    }

    /// Submit a move for the side to move. Rejections leave the state
    /// untouched. `force_move` (and training mode) skip destination
    /// validation. A promotion without a usable kind promotes to a queen.
    pub fn make_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
        force_move: bool,
    ) -> MoveResult {
        if self.is_game_over() {
            return MoveResult::RejectedGameOver;
        }
        let Some(piece) = self.board.get(from) else {
            return MoveResult::RejectedNoPiece;
        };
        if piece.color != self.side_to_move {
            return MoveResult::RejectedWrongTurn;
        }
        if !to.is_valid() || from == to {
            return MoveResult::RejectedIllegalDestination;
        }
        if !force_move && !self.allow_illegal_moves && !self.legal_moves_from(from).contains(&to) {
            return MoveResult::RejectedIllegalDestination;
        }

        let promotion = if self.is_promotion(from, to) {
            Some(promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        apply_move_internal(self, from, to, promotion, true);
        self.detect_game_end();
        MoveResult::Accepted
    }

    /// Simulation entry point: no history, no king-capture outcome.
    pub(crate) fn apply_simulated(&mut self, mv: &ChessMove) {
        apply_move_internal(self, mv.from, mv.to, mv.promotion, false);
    }

    /// The outcome if the side to move has no legal move: checkmate when in
    /// check, stalemate otherwise.
    pub fn outcome_without_moves(&self) -> Outcome {
        if self.in_check(self.side_to_move) {
            Outcome::win_for(self.side_to_move.opposite())
        } else {
            Outcome::Draw
        }
    }

    /// End the game if the side to move has no legal destination at all.
    pub(crate) fn detect_game_end(&mut self) {
        if self.is_game_over() || has_any_legal_move(self) {
            return;
        }
        self.outcome = self.outcome_without_moves();
        info!(outcome = ?self.outcome, plies = self.history.len(), "game over");
    }
}
