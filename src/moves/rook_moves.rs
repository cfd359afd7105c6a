use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::trace_rays;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    trace_rays(board, from, color, &ROOK_DIRECTIONS)
}
