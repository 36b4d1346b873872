//! Position transitions.
//!
//! `apply_move` is a pure function from a position and a move to the next
//! position. `make_move_on_board` performs only the piece relocation and is
//! what the legality filter runs on a scratch board.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Relocate pieces for `mv`, including the rook hop of a castle, the pawn
/// removed by en passant and the piece swap of a promotion.
///
/// # Panics
///
/// Panics if `mv.from` is empty. Moves must come from the generator for this
/// board.
pub fn make_move_on_board(board: &mut Board, mv: Move) {
    let moved = board
        .take(mv.from)
        .unwrap_or_else(|| panic!("no piece on {} for move {mv}", mv.from));

    let placed = match mv.kind {
        MoveKind::Promotion(kind) => Piece::new(moved.color, kind),
        _ => moved,
    };
    board.set(mv.to, Some(placed));

    match mv.kind {
        MoveKind::EnPassant => board.set(mv.en_passant_victim(), None),
        MoveKind::Castle(side) => {
            let row = mv.to.row;
            let rook = board.take(Square::new(row, side.rook_from_col()));
            board.set(Square::new(row, side.rook_to_col()), rook);
        }
        MoveKind::Normal | MoveKind::DoublePawnPush | MoveKind::Promotion(_) => {}
    }
}

/// Piece removed from the board by `mv`, if any.
#[inline]
pub fn captured_piece(board: &Board, mv: Move) -> Option<Piece> {
    if mv.is_en_passant() {
        board.get(mv.en_passant_victim())
    } else {
        board.get(mv.to)
    }
}

/// Next position after `mv`. The input is left untouched.
pub fn apply_move(game_state: &GameState, mv: Move) -> GameState {
    let moved = game_state
        .board
        .get(mv.from)
        .unwrap_or_else(|| panic!("no piece on {} for move {mv}", mv.from));
    let captured = captured_piece(&game_state.board, mv);

    let mut next = *game_state;
    make_move_on_board(&mut next.board, mv);

    update_castling_rights(&mut next.castling_rights, moved, mv);

    next.en_passant_target = match mv.kind {
        MoveKind::DoublePawnPush => Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col)),
        _ => None,
    };

    if moved.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moved.color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = game_state.side_to_move.opposite();
    next
}

fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, mv: Move) {
    if moved.kind == PieceKind::King {
        rights.revoke_all(moved.color);
    }

    // A rook leaving its corner, or anything landing on a corner (capturing
    // whatever rook stood there), ends castling on that side.
    for color in [Color::White, Color::Black] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let corner = Square::new(color.back_row(), side.rook_from_col());
            let rook_left = mv.from == corner && moved == Piece::new(color, PieceKind::Rook);
            if rook_left || mv.to == corner {
                rights.revoke(color, side);
            }
        }
    }
}
