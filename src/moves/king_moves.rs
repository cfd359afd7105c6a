//! King step generation.
//!
//! Castling is not a pattern move; it is offered by the legal move generator
//! after its own safety checks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KING_OFFSETS)
}
