//! The single board mutator.
//!
//! Castling, en passant and normal moves (with promotion) are recognised in
//! that order. Real moves additionally append notation to the history and
//! end the game when a king is captured; simulated moves do neither. The
//! side to move always flips.

use tracing::{debug, info};

use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET, KINGSIDE_ROOK_COLUMN, KINGSIDE_ROOK_TARGET, QUEENSIDE_ROOK_COLUMN,
    QUEENSIDE_ROOK_TARGET,
};
use crate::game_state::chess_types::{Outcome, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;

pub fn apply_move_internal(
    game_state: &mut GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    is_real_move: bool,
) {
    let Some(piece) = game_state.board.get(from) else {
        return;
    };

    let notation = if is_castling(piece, from, to) {
        apply_castling(game_state, piece, from, to)
    } else if is_en_passant(game_state, piece, from, to) {
        apply_en_passant(game_state, piece, from, to)
    } else {
        apply_normal(game_state, piece, from, to, promotion, is_real_move)
    };

    if is_real_move {
        debug!(side = %piece.color, notation = %notation, "move applied");
        game_state.history.push(notation);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
}

#[inline]
fn is_castling(piece: Piece, from: Position, to: Position) -> bool {
    piece.kind == PieceKind::King && from.row == to.row && (to.column - from.column).abs() == 2
}

#[inline]
fn is_en_passant(game_state: &GameState, piece: Piece, from: Position, to: Position) -> bool {
    piece.kind == PieceKind::Pawn
        && from.column != to.column
        && game_state.board.is_empty(to)
        && game_state.en_passant_target == Some(to)
}

fn apply_castling(game_state: &mut GameState, king: Piece, from: Position, to: Position) -> String {
    let row = from.row;
    let (rook_from, rook_to, notation) = if to.column == KINGSIDE_KING_TARGET {
        (KINGSIDE_ROOK_COLUMN, KINGSIDE_ROOK_TARGET, "O-O")
    } else {
        (QUEENSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_TARGET, "O-O-O")
    };

    let board = &mut game_state.board;
    board.set(from, None);
    board.set(to, Some(king.moved()));
    if let Some(rook) = board.take(Position::new(row, rook_from)) {
        board.set(Position::new(row, rook_to), Some(rook.moved()));
    }

    game_state.en_passant_target = None;
    notation.to_owned()
}

fn apply_en_passant(
    game_state: &mut GameState,
    pawn: Piece,
    from: Position,
    to: Position,
) -> String {
    let board = &mut game_state.board;
    board.set(from, None);
    board.set(to, Some(pawn.moved()));
    // The captured pawn stands beside the mover, on the destination file.
    board.set(Position::new(from.row, to.column), None);

    game_state.en_passant_target = None;
    format!("{from}x{to} e.p.")
}

fn apply_normal(
    game_state: &mut GameState,
    piece: Piece,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    is_real_move: bool,
) -> String {
    let is_pawn = piece.kind == PieceKind::Pawn;
    let board = &mut game_state.board;

    let captured = board.take(to);
    board.set(from, None);
    board.set(to, Some(piece.moved()));

    game_state.en_passant_target = if is_pawn && (to.row - from.row).abs() == 2 {
        Some(Position::new((from.row + to.row) / 2, from.column))
    } else {
        None
    };

    let mut promoted = None;
    if is_pawn && to.row == piece.color.promotion_row() {
        if let Some(requested) = promotion {
            let kind = if requested.is_promotion_target() {
                requested
            } else {
                PieceKind::Queen
            };
            game_state
                .board
                .set(to, Some(Piece::new(piece.color, kind).moved()));
            promoted = Some(kind);
        }
    }

    if is_real_move && captured.is_some_and(|victim| victim.kind == PieceKind::King) {
        game_state.outcome = Outcome::win_for(piece.color);
        info!(winner = %piece.color, "king captured");
    }

    let separator = if captured.is_some() { 'x' } else { '-' };
    let mut notation = format!("{from}{separator}{to}");
    if let Some(kind) = promoted {
        notation.push('=');
        notation.push(kind.letter());
    }
    notation
}
