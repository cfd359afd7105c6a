//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`. The heuristic scorer is
//! deliberately lopsided: it rewards the aggressor (the computer side) for
//! every enemy piece it threatens and for checking the enemy king.

use crate::game_state::chess_types::*;
use crate::moves::piece_moves::attacked_squares;

pub type Score = f64;

pub const PAWN_VALUE: Score = 100.0;
pub const KNIGHT_VALUE: Score = 320.0;
pub const BISHOP_VALUE: Score = 330.0;
pub const ROOK_VALUE: Score = 500.0;
pub const QUEEN_VALUE: Score = 900.0;
pub const KING_VALUE: Score = 100_000.0;

/// Magnitude of a decided game.
pub const WIN_SCORE: Score = KING_VALUE * 100.0;

const CENTER_BONUS_RATE: Score = 0.002;
const PAWN_ADVANCE_BONUS: Score = 2.0;
const THREAT_RATE: Score = 0.05;
const KING_THREAT_BONUS: Score = 500.0;
const GIVING_CHECK_BONUS: Score = 500.0;
const IN_CHECK_PENALTY: Score = 300.0;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective: higher is better for White.
    fn score(&self, game_state: &GameState) -> Score;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// +1 for White, -1 for Black.
#[inline]
const fn sign(color: Color) -> Score {
    match color {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}

#[inline]
fn in_center(position: Position) -> bool {
    (2..=5).contains(&position.row) && (2..=5).contains(&position.column)
}

#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer {
    pub aggressor: Color,
}

impl HeuristicScorer {
    pub const fn new(aggressor: Color) -> Self {
        Self { aggressor }
    }

    fn threat_bonus(&self, board: &Board, from: Position, piece: Piece) -> Score {
        let favour = sign(self.aggressor);
        let mut bonus = 0.0;
        for target in attacked_squares(board, from, piece) {
            let Some(victim) = board.get(target) else {
                continue;
            };
            if victim.color == self.aggressor {
                continue;
            }
            bonus += favour * piece_value(victim.kind) * THREAT_RATE;
            if victim.kind == PieceKind::King {
                bonus += favour * KING_THREAT_BONUS;
            }
        }
        bonus
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(Color::Black)
    }
}

impl BoardScorer for HeuristicScorer {
    fn score(&self, game_state: &GameState) -> Score {
        match game_state.outcome() {
            Outcome::WhiteWins => return WIN_SCORE,
            Outcome::BlackWins => return -WIN_SCORE,
            Outcome::Draw => return 0.0,
            Outcome::InProgress => {}
        }

        let board = game_state.board();
        let mut score = 0.0;

        for (position, piece) in board.occupied() {
            let value = piece_value(piece.kind);
            let side = sign(piece.color);

            score += side * value;

            if in_center(position) {
                score += side * value * CENTER_BONUS_RATE;
            }

            if piece.kind == PieceKind::Pawn {
                let advanced = (position.row - piece.color.pawn_start_row()).abs();
                score += side * PAWN_ADVANCE_BONUS * Score::from(advanced);
            }

            if piece.color == self.aggressor {
                score += self.threat_bonus(board, position, piece);
            }
        }

        let favour = sign(self.aggressor);
        if game_state.in_check(self.aggressor.opposite()) {
            score += favour * GIVING_CHECK_BONUS;
        }
        if game_state.in_check(self.aggressor) {
            score -= favour * IN_CHECK_PENALTY;
        }

        score
    }
}
