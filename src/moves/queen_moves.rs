use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::piece_moves::trace_rays;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn queen_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = trace_rays(board, from, color, &ROOK_DIRECTIONS);
    out.extend(trace_rays(board, from, color, &BISHOP_DIRECTIONS));
    out
}
