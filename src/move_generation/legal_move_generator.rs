//! Legal move generation.
//!
//! Pseudo-legal destinations come from the per-kind movement rules; en
//! passant and castling are layered on here because they depend on game
//! state. King safety is verified by simulating each candidate on a snapshot
//! and testing the mover's king afterwards.

use crate::game_state::chess_rules::{
    KINGSIDE_EMPTY_COLUMNS, KINGSIDE_KING_PATH, KINGSIDE_KING_TARGET, KINGSIDE_ROOK_COLUMN,
    KING_START_COLUMN, QUEENSIDE_EMPTY_COLUMNS, QUEENSIDE_KING_PATH, QUEENSIDE_KING_TARGET,
    QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::chess_types::{ChessMove, Color, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_internal;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::piece_moves::pseudo_legal_destinations;

/// Destinations the piece on `from` may move to. Empty when the square is
/// empty or holds a piece of the side not to move. In training mode the king
/// safety filter (and with it castling) is skipped.
pub fn legal_moves_from(game_state: &GameState, from: Position) -> Vec<Position> {
    let Some(piece) = game_state.board.get(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let mut candidates = pseudo_legal_destinations(&game_state.board, from, piece);
    if piece.kind == PieceKind::Pawn {
        candidates.extend(en_passant_capture(game_state, from, piece));
    }

    if game_state.allow_illegal_moves {
        return candidates;
    }

    let mut legal: Vec<Position> = candidates
        .into_iter()
        .filter(|to| leaves_king_safe(game_state, from, *to, piece.color))
        .collect();

    if piece.kind == PieceKind::King && !piece.has_moved {
        legal.extend(castling_destinations(game_state, from, piece.color));
    }

    legal
}

/// Every legal move for the side to move, pieces in board order. Pawn moves
/// onto the last rank are described as queen promotions.
pub fn all_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut out = Vec::with_capacity(48);

    for (from, piece) in game_state.board.pieces_of(side) {
        for to in legal_moves_from(game_state, from) {
            out.push(ChessMove {
                from,
                to,
                moved: piece,
                captured: captured_by(game_state, piece, from, to),
                promotion: (piece.kind == PieceKind::Pawn && to.row == side.promotion_row())
                    .then_some(PieceKind::Queen),
            });
        }
    }

    out
}

/// Early-exit variant used by end-of-game detection.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .into_iter()
        .any(|(from, _)| !legal_moves_from(game_state, from).is_empty())
}

/// The en-passant target, if the pawn on `from` stands beside the enemy pawn
/// that just advanced two squares.
fn en_passant_capture(game_state: &GameState, from: Position, pawn: Piece) -> Option<Position> {
    let target = game_state.en_passant_target?;
    if target.row != from.row + pawn.color.pawn_direction()
        || (target.column - from.column).abs() != 1
        || !game_state.board.is_empty(target)
    {
        return None;
    }

    let beside = Position::new(from.row, target.column);
    game_state
        .board
        .get(beside)
        .filter(|victim| victim.kind == PieceKind::Pawn && victim.color != pawn.color)
        .map(|_| target)
}

fn leaves_king_safe(game_state: &GameState, from: Position, to: Position, mover: Color) -> bool {
    let mut probe = game_state.snapshot();
    apply_move_internal(&mut probe, from, to, None, false);
    !is_king_in_check(&probe.board, mover)
}

fn castling_destinations(game_state: &GameState, from: Position, color: Color) -> Vec<Position> {
    let board = &game_state.board;
    let enemy = color.opposite();
    let mut out = Vec::with_capacity(2);

    if from.column != KING_START_COLUMN || is_square_attacked(board, from, enemy) {
        return out;
    }

    let sides = [
        (
            KINGSIDE_ROOK_COLUMN,
            &KINGSIDE_EMPTY_COLUMNS[..],
            &KINGSIDE_KING_PATH[..],
            KINGSIDE_KING_TARGET,
        ),
        (
            QUEENSIDE_ROOK_COLUMN,
            &QUEENSIDE_EMPTY_COLUMNS[..],
            &QUEENSIDE_KING_PATH[..],
            QUEENSIDE_KING_TARGET,
        ),
    ];

    for (rook_column, empty_columns, king_path, king_target) in sides {
        let row = from.row;
        let rook_ready = board
            .get(Position::new(row, rook_column))
            .is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
            });
        if !rook_ready {
            continue;
        }

        let path_clear = empty_columns
            .iter()
            .all(|column| board.is_empty(Position::new(row, *column)));
        if !path_clear {
            continue;
        }

        let path_safe = king_path
            .iter()
            .all(|column| !is_square_attacked(board, Position::new(row, *column), enemy));
        if path_safe {
            out.push(Position::new(row, king_target));
        }
    }

    out
}

fn captured_by(
    game_state: &GameState,
    piece: Piece,
    from: Position,
    to: Position,
) -> Option<Piece> {
    let board = &game_state.board;
    match board.get(to) {
        Some(victim) => Some(victim),
        None if piece.kind == PieceKind::Pawn
            && from.column != to.column
            && game_state.en_passant_target == Some(to) =>
        {
            board.get(Position::new(from.row, to.column))
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, has_any_legal_move, legal_moves_from};
    use crate::game_state::chess_types::{MoveResult, Position};
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> Position {
        Position::from_algebraic(name).expect("test square should parse")
    }

    fn play(game: &mut GameState, from: &str, to: &str) {
        assert_eq!(
            game.make_move(sq(from), sq(to), None, false),
            MoveResult::Accepted,
            "{from}{to} should be accepted"
        );
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).len(), 20);
        assert!(has_any_legal_move(&game));
    }

    #[test]
    fn wrong_side_or_empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(legal_moves_from(&game, sq("e7")).is_empty());
        assert!(legal_moves_from(&game, sq("e4")).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&game, sq("e2")).is_empty());
    }

    #[test]
    fn training_mode_keeps_pinned_moves() {
        let mut game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        game.set_allow_illegal_moves(true);
        assert_eq!(legal_moves_from(&game, sq("e2")).len(), 6);
    }

    #[test]
    fn en_passant_only_on_the_immediately_following_move() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "a7", "a6");
        play(&mut game, "e4", "e5");
        play(&mut game, "d7", "d5");

        assert!(legal_moves_from(&game, sq("e5")).contains(&sq("d6")));

        let mut later = game.snapshot();
        play(&mut later, "h2", "h3");
        play(&mut later, "h7", "h6");
        assert!(!legal_moves_from(&later, sq("e5")).contains(&sq("d6")));

        play(&mut game, "e5", "d6");
        assert!(game.board().get(sq("d5")).is_none());
        assert_eq!(
            game.history().last().map(String::as_str),
            Some("e5xd6 e.p.")
        );
    }

    #[test]
    fn en_passant_requires_adjacent_file() {
        let game =
            GameState::from_fen("4k3/8/8/2p3P1/8/8/8/4K3 w - c6 0 1").expect("FEN should parse");
        assert_eq!(legal_moves_from(&game, sq("g5")), vec![sq("g6")]);
    }

    #[test]
    fn castling_is_offered_when_clear() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let moves = legal_moves_from(&game, sq("e1"));
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_rejected_after_king_has_moved() {
        let mut game =
            GameState::from_fen("r3k2r/p7/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        play(&mut game, "e1", "f1");
        play(&mut game, "a7", "a6");
        play(&mut game, "f1", "e1");
        play(&mut game, "a6", "a5");

        let moves = legal_moves_from(&game, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_rejected_without_rights_in_fen() {
        let game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").expect("FEN should parse");
        assert!(!legal_moves_from(&game, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn castling_rejected_while_in_check() {
        let game =
            GameState::from_fen("r3k2r/8/8/4r3/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let moves = legal_moves_from(&game, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(!moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_rejected_through_attacked_transit_square() {
        let game =
            GameState::from_fen("r3k3/8/8/5r2/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let moves = legal_moves_from(&game, sq("e1"));
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_rejected_onto_attacked_landing_square() {
        let game =
            GameState::from_fen("r3k3/8/8/6r1/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!legal_moves_from(&game, sq("e1")).contains(&sq("g1")));
    }

    #[test]
    fn queenside_allows_attacked_b_file_square() {
        // Only d1 and c1 must be safe; b1 merely has to be empty.
        let game =
            GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&game, sq("e1")).contains(&sq("c1")));
    }

    #[test]
    fn promotions_are_described_as_queens() {
        let game =
            GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let promotion = all_legal_moves(&game)
            .into_iter()
            .find(|mv| mv.from == sq("a7"))
            .expect("a7 pawn should have a move");
        assert_eq!(
            promotion.promotion,
            Some(crate::game_state::chess_types::PieceKind::Queen)
        );
    }
}
