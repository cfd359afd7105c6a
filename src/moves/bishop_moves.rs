use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS)
}
