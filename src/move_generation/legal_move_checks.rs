//! Attacked-square and check detection.
//!
//! Every query scans the board from scratch; no attack maps are cached between
//! calls. The same predicate backs castling generation, the legality filter
//! and check/checkmate classification.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::first_blocker;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacker_origins;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Location of `color`'s king.
///
/// # Panics
///
/// Panics if the board has no king of that colour; such a board is not a
/// reachable chess position.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Square {
    board
        .king_square(color)
        .unwrap_or_else(|| panic!("board has no {color} king"))
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, king_square(board, color), color.opposite())
}

/// True if any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let attacker = |kind| Piece::new(attacker_color, kind);

    if pawn_attacker_origins(attacker_color, square)
        .any(|sq| board.holds(sq, attacker(PieceKind::Pawn)))
    {
        return true;
    }

    if knight_targets(square).any(|sq| board.holds(sq, attacker(PieceKind::Knight))) {
        return true;
    }

    if king_targets(square).any(|sq| board.holds(sq, attacker(PieceKind::King))) {
        return true;
    }

    let diagonal_hit = BISHOP_DIRECTIONS.into_iter().any(|direction| {
        matches!(
            first_blocker(board, square, direction),
            Some((_, piece)) if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
        )
    });
    if diagonal_hit {
        return true;
    }

    ROOK_DIRECTIONS.into_iter().any(|direction| {
        matches!(
            first_blocker(board, square, direction),
            Some((_, piece)) if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
        )
    })
}
