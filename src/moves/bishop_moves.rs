//! Bishop ray directions and attack sets.

use crate::game_state::chess_types::{Board, Square};
use crate::move_generation::legal_move_shared::sliding_attacks;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares a bishop on `square` sees, up to and including the first blocker
/// on each diagonal.
#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> Vec<Square> {
    sliding_attacks(board, square, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::{Board, Square};

    #[test]
    fn bishop_on_empty_board_from_d4_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(&Board::empty(), Square::new(4, 3)).len(), 13);
    }

    #[test]
    fn bishop_on_c1_at_start_is_boxed_in() {
        let attacks = bishop_attacks(&Board::starting(), Square::new(7, 2));
        let mut names: Vec<String> = attacks.iter().map(|sq| sq.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["b2", "d2"]);
    }
}
