//! Cheap move ordering for alpha-beta.
//!
//! Ordering only affects how much of the tree gets pruned, never the value the
//! search returns.

use std::cmp::Reverse;

use crate::game_state::chess_rules::material_value;
use crate::game_state::chess_types::Board;
use crate::move_generation::legal_move_apply::captured_piece;
use crate::moves::move_descriptions::{Move, MoveKind};

const CAPTURE_WEIGHT: i32 = 10;
const CASTLE_BONUS: i32 = 50;

/// Captures by victim value, then promotions by new piece value, then castling.
#[inline]
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = captured_piece(board, mv) {
        score += material_value(victim.kind) * CAPTURE_WEIGHT;
    }
    match mv.kind {
        MoveKind::Promotion(piece) => score += material_value(piece),
        MoveKind::Castle(_) => score += CASTLE_BONUS,
        MoveKind::Normal | MoveKind::DoublePawnPush | MoveKind::EnPassant => {}
    }
    score
}

/// Sort best-first. Equal scores keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| Reverse(score_move(board, *mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn captures_and_queen_promotions_come_first() {
        let game = GameState::from_diagram(
            &[
                ".r..k...", "P.......", "........", "........", "........", "........",
                "........", "....K...",
            ],
            Color::White,
            CastlingRights::NONE,
        )
        .expect("diagram should parse");

        let mut moves = legal_moves(&game);
        order_moves(&game.board, &mut moves);

        // axb8=Q: rook capture (5000) + queen (900).
        assert_eq!(moves[0].to.to_string(), "b8");
        assert_eq!(moves[0].promotion_piece(), Some(PieceKind::Queen));
        assert_eq!(score_move(&game.board, moves[0]), 5900);
        // Quiet king moves sink to the bottom.
        assert_eq!(score_move(&game.board, *moves.last().expect("moves exist")), 0);
    }

    #[test]
    fn ties_keep_generation_order() {
        let game = GameState::new_game();
        let generated = legal_moves(&game);
        let mut ordered = generated.clone();
        order_moves(&game.board, &mut ordered);
        assert_eq!(generated, ordered);
    }
}
