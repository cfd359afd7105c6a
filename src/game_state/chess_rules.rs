//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and default engine settings used when
//! a game is created or reset.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COLUMN: i8 = 4;

/// Kingside castling: rook corner, squares that must be empty, squares the
/// king crosses or lands on (must not be attacked), king landing column, and
/// rook landing column.
pub const KINGSIDE_ROOK_COLUMN: i8 = 7;
pub const KINGSIDE_EMPTY_COLUMNS: [i8; 2] = [5, 6];
pub const KINGSIDE_KING_PATH: [i8; 2] = [5, 6];
pub const KINGSIDE_KING_TARGET: i8 = 6;
pub const KINGSIDE_ROOK_TARGET: i8 = 5;

pub const QUEENSIDE_ROOK_COLUMN: i8 = 0;
pub const QUEENSIDE_EMPTY_COLUMNS: [i8; 3] = [1, 2, 3];
pub const QUEENSIDE_KING_PATH: [i8; 2] = [3, 2];
pub const QUEENSIDE_KING_TARGET: i8 = 2;
pub const QUEENSIDE_ROOK_TARGET: i8 = 3;

pub const DEFAULT_AI_SEARCH_DEPTH: u8 = 3;
