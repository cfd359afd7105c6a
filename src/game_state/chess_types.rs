//! Value types shared by the rules model, move generation and search.
//!
//! Board coordinates are `(row, column)` with row 0 holding Black's back rank
//! (rank 8) and row 7 holding White's back rank (rank 1).

use std::fmt;

use crate::errors::ChessError;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step taken by this side's pawns when advancing.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Notation letter used in promotion suffixes and FEN.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may turn into.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A placed piece. Its square is its index on the `Board`; the piece itself
/// carries no position and no reference back to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    #[inline]
    pub const fn is_white(&self) -> bool {
        matches!(self.color, Color::White)
    }
}

/// Board coordinate. May be constructed off-board; every consumer checks
/// `is_valid` (or uses `offset`, which only yields on-board squares).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < 8 && self.column >= 0 && self.column < 8
    }

    /// Square reached by stepping `(d_row, d_column)`, if it is on the board.
    #[inline]
    pub fn offset(&self, d_row: i8, d_column: i8) -> Option<Position> {
        let next = Position::new(self.row + d_row, self.column + d_column);
        next.is_valid().then_some(next)
    }

    pub fn from_algebraic(square: &str) -> Result<Self, ChessError> {
        algebraic_to_position(square)
    }

    pub fn to_algebraic(&self) -> String {
        position_to_algebraic(*self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// A fully described candidate move, as produced for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
}

/// Game result state. Everything except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    /// Label reported to the presentation layer.
    pub const fn winner_label(self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::WhiteWins => Some("White"),
            Outcome::BlackWins => Some("Black"),
            Outcome::Draw => Some("Draw"),
        }
    }

    /// Result token for game records.
    pub const fn result_token(self) -> &'static str {
        match self {
            Outcome::InProgress => "*",
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

/// Result of submitting a move. Every rejection leaves the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Accepted,
    RejectedNoPiece,
    RejectedWrongTurn,
    RejectedIllegalDestination,
    RejectedGameOver,
}

impl MoveResult {
    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Accepted)
    }
}
