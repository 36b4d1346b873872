use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_unless_friendly, squares_of};
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for from in squares_of(game_state, game_state.side_to_move, PieceKind::Queen) {
        push_unless_friendly(game_state, from, queen_attacks(&game_state.board, from), out);
    }
}
