//! Pawn geometry: push direction, starting and promotion rows, capture squares.

use crate::game_state::chess_types::{Color, Square};

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Diagonal squares a `color` pawn on `square` attacks.
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(forward, d_col))
}

/// Squares from which a `color` pawn would attack `target`.
#[inline]
pub fn pawn_attacker_origins(color: Color, target: Square) -> impl Iterator<Item = Square> {
    let backward = -color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| target.offset(backward, d_col))
}
