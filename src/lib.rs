//! Crate root module declarations for the mailbox chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, the game session and utility helpers) so binaries, tests
//! and external tooling can import stable module paths. The most common entry
//! points are re-exported at the root.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod history_entry;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{
    Board, CastleSide, CastlingRights, Color, GameState, Piece, PieceKind, Square,
};
pub use game_state::game_status::{classify, is_in_check, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::{legal_moves, pseudo_legal_moves};
pub use move_generation::perft::PerftCounts;
pub use moves::move_descriptions::{Move, MoveKind};
pub use search::alpha_beta::choose_move;
pub use search::board_scoring::evaluate;

/// Perft with the standard legal move generator.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    move_generation::perft::perft(
        &move_generation::legal_move_generator::LegalMoveGenerator,
        game_state,
        depth,
    )
}
