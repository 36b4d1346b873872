use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_unless_friendly, squares_of};
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for from in squares_of(game_state, game_state.side_to_move, PieceKind::Rook) {
        push_unless_friendly(game_state, from, rook_attacks(&game_state.board, from), out);
    }
}
