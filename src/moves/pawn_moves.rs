use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// Diagonal squares a pawn of `color` on `from` attacks.
pub fn pawn_attacks(from: Position, color: Color) -> Vec<Position> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|d_column| from.offset(dir, d_column))
        .collect()
}

/// Forward pushes (one square, or two from the starting row when both are
/// empty) plus diagonal captures of enemy pieces. En passant is added by the
/// legal move generator, which knows the en-passant target.
pub fn pawn_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let dir = color.pawn_direction();
    let mut out = Vec::with_capacity(4);

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            out.push(one);
            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(from, color) {
        if board.get(target).is_some_and(|piece| piece.color != color) {
            out.push(target);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_destinations};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = Position::new(6, 4);
        assert_eq!(
            pawn_attacks(e2, Color::White),
            vec![Position::new(5, 3), Position::new(5, 5)]
        );
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        let a7 = Position::new(1, 0);
        assert_eq!(pawn_attacks(a7, Color::Black), vec![Position::new(2, 1)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::standard();
        let e2 = Position::new(6, 4);
        board.set(
            Position::new(5, 4),
            Some(Piece::new(Color::Black, PieceKind::Knight)),
        );
        assert!(pawn_destinations(&board, e2, Color::White).is_empty());
    }

    #[test]
    fn pawn_captures_only_enemy_pieces() {
        let mut board = Board::empty();
        let d4 = Position::new(4, 3);
        board.set(
            Position::new(3, 2),
            Some(Piece::new(Color::Black, PieceKind::Rook)),
        );
        board.set(
            Position::new(3, 4),
            Some(Piece::new(Color::White, PieceKind::Rook)),
        );

        let targets = pawn_destinations(&board, d4, Color::White);

        assert_eq!(targets, vec![Position::new(3, 3), Position::new(3, 2)]);
    }

    #[test]
    fn double_push_only_from_starting_row() {
        let board = Board::empty();
        let e3 = Position::new(5, 4);
        assert_eq!(pawn_destinations(&board, e3, Color::White).len(), 1);
        let e7 = Position::new(1, 4);
        assert_eq!(pawn_destinations(&board, e7, Color::Black).len(), 2);
    }
}
