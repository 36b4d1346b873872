//! Canonical chess-rule constants.
//!
//! Starting layout, promotion choices, material values and the draw
//! thresholds used by the termination detector and the evaluator.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position, row 0 = rank 8. Uppercase is White.
pub const STARTING_DIAGRAM: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Promotion pieces in the order they are generated.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Halfmove clock value at which the fifty-move rule forces a draw.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Centipawn material value. The king value keeps the evaluator from ever
/// preferring a line that loses it.
#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}
