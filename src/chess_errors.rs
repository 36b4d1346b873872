//! Recoverable errors for the engine's outer surfaces.
//!
//! Rules code (move generation, move application, classification and
//! evaluation) never fails: broken preconditions such as a missing king are
//! caller bugs and panic. `ChessError` covers input that a caller can get
//! wrong at runtime: square strings, diagrams, engine options and session
//! commands.

use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Text that does not name a square (`a1`..`h8`).
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Board diagram with a malformed row, unknown piece letter or wrong king count.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    /// Move not present in the legal move list for the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Session command issued after the game reached a terminal status.
    #[error("game is already over: {0}")]
    GameOver(GameStatus),

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("invalid engine option {name}={value}")]
    InvalidOption { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
