//! Move value type.
//!
//! A `Move` is a fixed-shape record: origin, destination and a tag saying
//! which special rule (if any) the move uses. It carries no reference to the
//! board it was generated from, so it can be stored, compared and replayed
//! freely.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn advance of two squares from its starting row.
    DoublePawnPush,
    /// Pawn capture onto the en-passant target; the captured pawn sits beside
    /// the origin square, not on the destination.
    EnPassant,
    /// King move of two squares; the rook hops over it.
    Castle(CastleSide),
    /// Pawn reaching the back rank, with or without a capture.
    Promotion(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Normal)
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub const fn en_passant_victim(&self) -> Square {
        Square {
            row: self.from.row,
            col: self.to.col,
        }
    }
}

/// Long algebraic form: `e2e4`, `e1g1`, `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_long_algebraic() {
        let push = Move::new(Square::new(6, 4), Square::new(4, 4), MoveKind::DoublePawnPush);
        assert_eq!(push.to_string(), "e2e4");

        let promo = Move::new(
            Square::new(1, 0),
            Square::new(0, 0),
            MoveKind::Promotion(PieceKind::Knight),
        );
        assert_eq!(promo.to_string(), "a7a8n");
        assert_eq!(promo.promotion_piece(), Some(PieceKind::Knight));
    }

    #[test]
    fn moves_compare_all_fields() {
        let from = Square::new(1, 0);
        let to = Square::new(0, 0);
        assert_ne!(
            Move::new(from, to, MoveKind::Promotion(PieceKind::Queen)),
            Move::new(from, to, MoveKind::Promotion(PieceKind::Rook))
        );
        assert_eq!(Move::normal(from, to), Move::normal(from, to));
    }

    #[test]
    fn en_passant_victim_is_beside_origin() {
        let capture = Move::new(Square::new(3, 4), Square::new(2, 3), MoveKind::EnPassant);
        assert!(capture.is_en_passant());
        assert_eq!(capture.en_passant_victim(), Square::new(3, 3));
    }
}
