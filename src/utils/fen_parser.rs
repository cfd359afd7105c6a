//! FEN-to-GameState parser.
//!
//! Builds a game state from a Forsyth-Edwards Notation record. Castling
//! rights become king/rook moved-flags; the halfmove and fullmove counters
//! are validated when present but not stored.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COLUMN, KING_START_COLUMN, QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| invalid(&format!("bad move counter '{counter}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(&mut board, castling_part)?;
    let en_passant_target = parse_en_passant_target(en_passant_part)?;

    Ok(GameState::from_board(board, side_to_move, en_passant_target))
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let row = row as i8;
        let mut column = 0i8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                let empty_count = empty_count as i8;
                if column + empty_count > 8 {
                    return Err(invalid("rank has too many files"));
                }
                column += empty_count;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if column >= 8 {
                return Err(invalid("rank has too many files"));
            }

            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let mut piece = Piece::new(color, kind);
            // Kings and rooks are re-armed from the castling field below.
            piece.has_moved = match kind {
                PieceKind::King | PieceKind::Rook => true,
                PieceKind::Pawn => row != color.pawn_start_row(),
                _ => false,
            };
            board.set(Position::new(row, column), Some(piece));
            column += 1;
        }

        if column != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side to move '{side_part}'"))),
    }
}

fn apply_castling_rights(board: &mut Board, castling_part: &str) -> Result<(), ChessError> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_column) = match ch {
            'K' => (Color::White, KINGSIDE_ROOK_COLUMN),
            'Q' => (Color::White, QUEENSIDE_ROOK_COLUMN),
            'k' => (Color::Black, KINGSIDE_ROOK_COLUMN),
            'q' => (Color::Black, QUEENSIDE_ROOK_COLUMN),
            _ => return Err(invalid(&format!("invalid castling character '{ch}'"))),
        };

        let row = color.back_row();
        let king_sq = Position::new(row, KING_START_COLUMN);
        let rook_sq = Position::new(row, rook_column);
        let king = board.get(king_sq);
        let rook = board.get(rook_sq);

        let king_home = king.is_some_and(|p| p.kind == PieceKind::King && p.color == color);
        let rook_home = rook.is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
        if !king_home || !rook_home {
            return Err(invalid(&format!(
                "castling right '{ch}' without king and rook on their home squares"
            )));
        }

        if let (Some(mut king), Some(mut rook)) = (king, rook) {
            king.has_moved = false;
            rook.has_moved = false;
            board.set(king_sq, Some(king));
            board.set(rook_sq, Some(rook));
        }
    }

    Ok(())
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Option<Position>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_position(en_passant_part).map(Some)
}
