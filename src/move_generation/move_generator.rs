//! Move generator abstraction.
//!
//! Perft and the search are written against this trait so alternative
//! generators (or test doubles) can be swapped in without touching them.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
