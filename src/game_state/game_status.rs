//! Game-termination detection.
//!
//! Checkmate and stalemate are decided first (they need the legal move list),
//! then the fifty-move rule, then the narrow insufficient-material test: bare
//! kings, or kings plus a single bishop or knight. Other drawn material
//! balances are not recognised.

use std::fmt;

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is mated.
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawInsufficientMaterial,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::DrawFiftyMove | GameStatus::DrawInsufficientMaterial
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw by fifty-move rule",
            GameStatus::DrawInsufficientMaterial => "draw by insufficient material",
        };
        f.write_str(text)
    }
}

/// Classify the position for the side to move.
pub fn classify(game_state: &GameState) -> GameStatus {
    if legal_moves(game_state).is_empty() {
        return if is_in_check(game_state) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return GameStatus::DrawFiftyMove;
    }

    if is_insufficient_material(&game_state.board) {
        return GameStatus::DrawInsufficientMaterial;
    }

    GameStatus::Ongoing
}

#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(&game_state.board, game_state.side_to_move)
}

pub fn is_insufficient_material(board: &Board) -> bool {
    match board.piece_count() {
        2 => true,
        3 => board
            .pieces()
            .any(|(_, piece)| matches!(piece.kind, PieceKind::Bishop | PieceKind::Knight)),
        _ => false,
    }
}
