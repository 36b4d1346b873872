use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Snapshot taken before a move is committed, restored by undo.
///
/// The engine itself keeps no history; entries are owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: GameState,
    /// Black pieces captured by White so far.
    pub white_captured: Vec<Piece>,
    /// White pieces captured by Black so far.
    pub black_captured: Vec<Piece>,
    pub last_move: Option<Move>,
}
