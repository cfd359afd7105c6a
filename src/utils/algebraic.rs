//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! positions. Row 0 is rank 8 and column 0 is the a-file.

use crate::errors::ChessError;
use crate::game_state::chess_types::Position;

/// Convert coordinate notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let column = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok(Position::new(row, column))
}

/// Convert a position to coordinate notation (for example: "e4"). Off-board
/// positions render as "??".
pub fn position_to_algebraic(position: Position) -> String {
    if !position.is_valid() {
        return "??".to_owned();
    }

    let file_char = char::from(b'a' + position.column as u8);
    let rank_char = char::from(b'8' - position.row as u8);
    format!("{file_char}{rank_char}")
}
