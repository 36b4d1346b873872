use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_unless_friendly, squares_of};
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for from in squares_of(game_state, game_state.side_to_move, PieceKind::Knight) {
        push_unless_friendly(game_state, from, knight_targets(from), out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn starting_knights_have_four_moves() {
        let mut out = Vec::new();
        generate_knight_moves(&GameState::new_game(), &mut out);
        assert_eq!(out.len(), 4);
    }
}
