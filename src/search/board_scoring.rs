//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`. Scores are centipawns from White's point of view: positive
//! favours White, negative favours Black.

use crate::game_state::chess_rules::material_value;
use crate::game_state::chess_types::*;
use crate::search::piece_square_tables::positional_value;

pub trait BoardScorer: Send + Sync {
    /// White-minus-Black score for `board`.
    fn score(&self, board: &Board) -> i32;
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(square, piece)| {
                let value =
                    material_value(piece.kind) + positional_value(piece.color, piece.kind, square);
                signed(piece.color, value)
            })
            .sum()
    }
}

/// Material only; no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| signed(piece.color, material_value(piece.kind)))
            .sum()
    }
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Static evaluation used by the default engine.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    PieceSquareScorer.score(board)
}
