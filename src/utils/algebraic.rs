//! Coordinate text conversions.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and `Square`, and
//! parses long algebraic move text against a position's legal moves.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Find the legal move written as `e2e4` or `e7e8q` in `game_state`.
///
/// A promotion without a suffix is rejected rather than defaulted.
pub fn parse_long_algebraic(game_state: &GameState, text: &str) -> ChessResult<Move> {
    let text = text.trim();
    if text.len() != 4 && text.len() != 5 {
        return Err(ChessError::IllegalMove(text.to_owned()));
    }
    let from = algebraic_to_square(text.get(0..2).unwrap_or_default())?;
    let to = algebraic_to_square(text.get(2..4).unwrap_or_default())?;
    let promotion = match text.get(4..) {
        Some("") | None => None,
        Some(suffix) => Some(
            suffix
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?,
        ),
    };

    legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}
