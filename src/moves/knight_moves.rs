use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::piece_moves::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::knight_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let board = Board::empty();
        assert_eq!(
            knight_destinations(&board, Position::new(4, 3), Color::White).len(),
            8
        );
    }

    #[test]
    fn knight_on_b1_at_start_has_two_targets() {
        let board = Board::standard();
        let targets = knight_destinations(&board, Position::new(7, 1), Color::White);
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Position::new(5, 0)));
        assert!(targets.contains(&Position::new(5, 2)));
    }
}
