use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Squares beyond `from` in direction `(d_row, d_col)` up to the board edge.
#[inline]
pub fn ray(from: Square, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(d_row, d_col), move |sq| sq.offset(d_row, d_col))
}

/// First occupied square along a ray, with its piece.
#[inline]
pub fn first_blocker(board: &Board, from: Square, direction: (i8, i8)) -> Option<(Square, Piece)> {
    ray(from, direction).find_map(|sq| board.get(sq).map(|piece| (sq, piece)))
}

/// Every square reachable along `directions`, stopping on (and including) the
/// first occupied square of each ray.
pub fn sliding_attacks(board: &Board, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &direction in directions {
        for sq in ray(from, direction) {
            out.push(sq);
            if !board.is_empty(sq) {
                break;
            }
        }
    }
    out
}

/// Push a normal move to each target not holding a piece of the mover's colour.
#[inline]
pub fn push_unless_friendly(
    game_state: &GameState,
    from: Square,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    for to in targets {
        if !game_state.board.is_color(to, side) {
            out.push(Move::normal(from, to));
        }
    }
}

/// Squares holding a piece of `color` and `kind`.
#[inline]
pub fn squares_of(
    game_state: &GameState,
    color: Color,
    kind: PieceKind,
) -> impl Iterator<Item = Square> + '_ {
    let wanted = Piece::new(color, kind);
    game_state
        .board
        .pieces()
        .filter(move |(_, piece)| *piece == wanted)
        .map(|(sq, _)| sq)
}
