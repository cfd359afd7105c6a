//! Attack and check queries over a board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::attacked_squares;

/// True if any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .occupied()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, piece)| attacked_squares(board, from, piece).contains(&square))
}

/// True if `color`'s king is attacked. A missing king (captured in training
/// mode) is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
