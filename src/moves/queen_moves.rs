//! Queen ray directions: the union of rook and bishop lines.

use crate::game_state::chess_types::{Board, Square};
use crate::move_generation::legal_move_shared::sliding_attacks;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> Vec<Square> {
    sliding_attacks(board, square, &QUEEN_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::{Board, Square};

    #[test]
    fn queen_from_d4_on_empty_board_has_twenty_seven_squares() {
        assert_eq!(queen_attacks(&Board::empty(), Square::new(4, 3)).len(), 27);
    }
}
