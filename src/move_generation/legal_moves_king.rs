use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_unless_friendly, squares_of};
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveKind};

const KING_HOME_COL: u8 = 4;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    for from in squares_of(game_state, side, PieceKind::King) {
        push_unless_friendly(game_state, from, king_targets(from), out);
        generate_castling_moves(game_state, from, out);
    }
}

/// Castling needs the right, an empty path, the rook on its corner, and the
/// king's origin, transit and destination squares all free from attack.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let board = &game_state.board;
    let row = side.back_row();

    if king_from != Square::new(row, KING_HOME_COL) {
        return;
    }

    for castle_side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !game_state.castling_rights.has(side, castle_side) {
            continue;
        }

        let rook_col = castle_side.rook_from_col();
        if !board.holds(Square::new(row, rook_col), Piece::new(side, PieceKind::Rook)) {
            continue;
        }

        let (low, high) = if rook_col < KING_HOME_COL {
            (rook_col + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, rook_col)
        };
        if (low..high).any(|col| !board.is_empty(Square::new(row, col))) {
            continue;
        }

        let king_to_col = castle_side.king_to_col();
        let transit_col = castle_side.rook_to_col();
        let unsafe_path = [KING_HOME_COL, transit_col, king_to_col]
            .into_iter()
            .any(|col| is_square_attacked(board, Square::new(row, col), enemy));
        if unsafe_path {
            continue;
        }

        out.push(Move::new(
            king_from,
            Square::new(row, king_to_col),
            MoveKind::Castle(castle_side),
        ));
    }
}
