//! Position representation.
//!
//! `Board` is an 8x8 mailbox of optional pieces. `GameState` adds the side to
//! move, castling rights, en-passant target and the two move counters. Both are
//! small `Copy` values: search clones them per branch and the session keeps
//! whole snapshots for undo.

use std::ops::{Index, IndexMut};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_DIAGRAM;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting() -> Self {
        Self::from_diagram(&STARTING_DIAGRAM).expect("starting diagram should always parse")
    }

    /// Build a board from eight rows of eight characters, rank 8 first.
    ///
    /// `.` marks an empty square, uppercase letters are White pieces and
    /// lowercase letters are Black pieces (`PNBRQK`).
    pub fn from_diagram(rows: &[&str; 8]) -> ChessResult<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(ChessError::InvalidDiagram(format!(
                    "row {row} has {} squares, expected 8",
                    chars.len()
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    ChessError::InvalidDiagram(format!("unknown piece '{ch}' in row {row}"))
                })?;
                board.squares[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True if `square` holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color == color)
    }

    #[inline]
    pub fn holds(&self, square: Square, piece: Piece) -> bool {
        self.get(square) == Some(piece)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.row as usize][square.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.squares[square.row as usize][square.col as usize]
    }
}

/// Complete description of a position for rules purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped over on the previous ply, if that ply was a
    /// double push. Cleared by every other move.
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Position from a diagram with fresh clocks and no en-passant target.
    ///
    /// Rejects boards that do not hold exactly one king per colour.
    pub fn from_diagram(
        rows: &[&str; 8],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let board = Board::from_diagram(rows)?;
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceKind::King);
            let kings = board.pieces().filter(|(_, piece)| *piece == king).count();
            if kings != 1 {
                return Err(ChessError::InvalidDiagram(format!(
                    "expected one {color} king, found {kings}"
                )));
            }
        }
        Ok(Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        })
    }
}
