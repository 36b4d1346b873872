//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, then drops every move that
//! leaves the mover's king attacked. The king test is recomputed from scratch
//! on a scratch board for each candidate.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move_on_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        legal_moves(game_state)
    }
}

/// Every move obeying piece movement rules, without the own-king safety test.
/// Castling is the exception: its attacked-square conditions are already
/// applied here.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(game_state);
    moves.retain(|mv| keeps_king_safe(game_state, *mv));
    moves
}

/// True if playing `mv` does not leave the mover's own king attacked.
#[inline]
pub fn keeps_king_safe(game_state: &GameState, mv: Move) -> bool {
    let mut scratch = game_state.board;
    make_move_on_board(&mut scratch, mv);
    !is_king_in_check(&scratch, game_state.side_to_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    fn find(game: &GameState, from: &str, to: &str) -> Move {
        legal_moves(game)
            .into_iter()
            .find(|mv| mv.from == sq(from) && mv.to == sq(to))
            .unwrap_or_else(|| panic!("{from}{to} should be legal"))
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game).len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let game = GameState::from_diagram(
            &[
                "....r..k", "........", "........", "........", "........", "........",
                "....N...", "....K...",
            ],
            Color::White,
            CastlingRights::NONE,
        )
        .expect("diagram should parse");

        let pseudo = pseudo_legal_moves(&game);
        let legal = legal_moves(&game);
        assert!(pseudo.iter().any(|mv| mv.from == sq("e2")));
        assert!(!legal.iter().any(|mv| mv.from == sq("e2")));
    }

    #[test]
    fn en_passant_is_only_available_immediately() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            let mv = find(&game, from, to);
            game = apply_move(&game, mv);
        }

        let ep = legal_moves(&game)
            .into_iter()
            .find(|mv| mv.kind == MoveKind::EnPassant)
            .expect("exd6 en passant should be legal right after d7d5");
        assert_eq!(ep.from, sq("e5"));
        assert_eq!(ep.to, sq("d6"));

        // Waiting one move forfeits the capture.
        game = apply_move(&game, find(&game, "h2", "h3"));
        game = apply_move(&game, find(&game, "a6", "a5"));
        assert!(!legal_moves(&game).iter().any(|mv| mv.kind == MoveKind::EnPassant));
        assert!(!legal_moves(&game).iter().any(|mv| mv.from == sq("e5") && mv.to == sq("d6")));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        // Capturing on d6 would empty the fifth rank between the king and rook.
        let mut game = GameState::from_diagram(
            &[
                "....k...", "........", "........", "K..pP..r", "........", "........",
                "........", "........",
            ],
            Color::White,
            CastlingRights::NONE,
        )
        .expect("diagram should parse");
        game.en_passant_target = Some(sq("d6"));

        assert!(pseudo_legal_moves(&game).iter().any(|mv| mv.is_en_passant()));
        assert!(!legal_moves(&game).iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn random_playouts_never_leave_own_king_attacked() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let mut game = GameState::new_game();
            for _ in 0..80 {
                let moves = legal_moves(&game);
                let Some(mv) = moves.choose(&mut rng).copied() else {
                    break;
                };
                for candidate in &moves {
                    let next = apply_move(&game, *candidate);
                    assert!(
                        !is_king_in_check(&next.board, game.side_to_move),
                        "{candidate} leaves the king attacked"
                    );
                }
                game = apply_move(&game, mv);
            }
        }
    }
}
