//! Rook ray directions and attack sets.

use crate::game_state::chess_types::{Board, Square};
use crate::move_generation::legal_move_shared::sliding_attacks;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> Vec<Square> {
    sliding_attacks(board, square, &ROOK_DIRECTIONS)
}
