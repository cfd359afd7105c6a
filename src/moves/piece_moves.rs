//! Per-kind movement dispatch.
//!
//! Movement is a pure function of the piece value, its square and the board
//! contents; nothing here knows whose turn it is or whether a king would be
//! left in check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::{pawn_attacks, pawn_destinations};
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Pseudo-legal destinations for `piece` standing on `from`.
pub fn pseudo_legal_destinations(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color),
        PieceKind::Knight => knight_destinations(board, from, piece.color),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color),
        PieceKind::Rook => rook_destinations(board, from, piece.color),
        PieceKind::Queen => queen_destinations(board, from, piece.color),
        PieceKind::King => king_destinations(board, from, piece.color),
    }
}

/// Squares `piece` threatens. Pawns threaten their diagonals whether or not
/// anything stands there; every other kind threatens its destinations.
pub fn attacked_squares(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        _ => pseudo_legal_destinations(board, from, piece),
    }
}

/// Slide along each direction until the edge or the first occupied square,
/// which is included only when it holds an enemy piece.
pub fn trace_rays(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    for &(d_row, d_column) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_column) {
            match board.get(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    out
}

/// Fixed-offset targets that are on the board and not held by a friendly
/// piece.
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|to| board.get(*to).map_or(true, |occupant| occupant.color != color))
        .collect()
}
