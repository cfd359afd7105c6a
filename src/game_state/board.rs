//! 8x8 mailbox board.
//!
//! `Board` exclusively owns every placed piece. Pieces are plain values, so a
//! snapshot is a full copy that shares nothing with its source.

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (column, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let column = column as i8;
                board.set(Position::new(back, column), Some(Piece::new(color, *kind)));
                board.set(
                    Position::new(pawns, column),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Piece on `position`; off-board squares read as empty.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        if !position.is_valid() {
            return None;
        }
        self.squares[position.row as usize][position.column as usize]
    }

    /// Place or clear a square. Writes to off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        if position.is_valid() {
            self.squares[position.row as usize][position.column as usize] = piece;
        }
    }

    /// Remove and return the piece on `position`.
    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        let piece = self.get(position);
        self.set(position, None);
        piece
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// All occupied squares in row-major order (a8 first, h1 last).
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| {
                cell.map(|piece| (Position::new(row as i8, column as i8), piece))
            })
        })
    }

    /// Pieces of one color in row-major order, which keeps search ordering
    /// reproducible.
    pub fn pieces_of(&self, color: Color) -> Vec<(Position, Piece)> {
        self.occupied()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.occupied()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }

    /// Independent deep copy.
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }
}
