use crate::game_state::chess_rules::PROMOTION_PIECES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::squares_of;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_start_row, promotion_row};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let forward = side.forward();

    for from in squares_of(game_state, side, PieceKind::Pawn) {
        if let Some(to) = from.offset(forward, 0) {
            if board.is_empty(to) {
                push_pawn_move(side, from, to, out);

                if from.row == pawn_start_row(side) {
                    if let Some(two_step) = to.offset(forward, 0) {
                        if board.is_empty(two_step) {
                            out.push(Move::new(from, two_step, MoveKind::DoublePawnPush));
                        }
                    }
                }
            }
        }

        for to in pawn_attack_targets(side, from) {
            if board.is_color(to, side.opposite()) {
                push_pawn_move(side, from, to, out);
            } else if game_state.en_passant_target == Some(to) {
                out.push(Move::new(from, to, MoveKind::EnPassant));
            }
        }
    }
}

/// A pawn arriving on the back rank becomes one move per promotion piece.
#[inline]
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row == promotion_row(side) {
        for piece in PROMOTION_PIECES {
            out.push(Move::new(from, to, MoveKind::Promotion(piece)));
        }
    } else {
        out.push(Move::normal(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn starting_pawns_have_sixteen_pushes() {
        let mut out = Vec::new();
        generate_pawn_moves(&GameState::new_game(), &mut out);
        assert_eq!(out.len(), 16);
        assert_eq!(out.iter().filter(|mv| mv.kind == MoveKind::DoublePawnPush).count(), 8);
    }

    #[test]
    fn capture_onto_back_rank_expands_into_four_promotions() {
        let game = GameState::from_diagram(
            &[
                ".n..k...", "P.......", "........", "........", "........", "........",
                "........", "....K...",
            ],
            Color::White,
            CastlingRights::NONE,
        )
        .expect("diagram should parse");

        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        assert_eq!(out.len(), 8);
        let promotions_on_b8 = out
            .iter()
            .filter(|mv| mv.to == Square::new(0, 1) && mv.promotion_piece().is_some())
            .count();
        assert_eq!(promotions_on_b8, 4);
    }

    #[test]
    fn blocked_pawn_cannot_double_push() {
        let game = GameState::from_diagram(
            &[
                "....k...", "........", "........", "........", "........", "....n...",
                "....P...", "....K...",
            ],
            Color::White,
            CastlingRights::NONE,
        )
        .expect("diagram should parse");

        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        assert!(out.is_empty());
    }
}
