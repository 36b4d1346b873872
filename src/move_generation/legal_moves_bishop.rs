use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_unless_friendly, squares_of};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for from in squares_of(game_state, game_state.side_to_move, PieceKind::Bishop) {
        push_unless_friendly(game_state, from, bishop_attacks(&game_state.board, from), out);
    }
}
