//! Headless human-versus-engine game session.
//!
//! Owns everything the rules core deliberately does not: the undo history,
//! captured-piece trays, last move and cached game status. A front end drives
//! it with `play`, `engine_reply` and `undo` and renders from the accessors.

use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, captured_piece};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::parse_long_algebraic;

pub struct GameSession {
    state: GameState,
    history: Vec<HistoryEntry>,
    white_captured: Vec<Piece>,
    black_captured: Vec<Piece>,
    last_move: Option<Move>,
    status: GameStatus,
    engine: Box<dyn Engine>,
    engine_color: Color,
}

impl GameSession {
    /// New game from the initial position with `engine` playing `engine_color`.
    pub fn new(engine: Box<dyn Engine>, engine_color: Color) -> Self {
        Self::from_state(GameState::new_game(), engine, engine_color)
    }

    pub fn from_state(state: GameState, mut engine: Box<dyn Engine>, engine_color: Color) -> Self {
        engine.new_game();
        Self {
            status: classify(&state),
            state,
            history: Vec::new(),
            white_captured: Vec::new(),
            black_captured: Vec::new(),
            last_move: None,
            engine,
            engine_color,
        }
    }

    /// Reset to the initial position, keeping the engine and its colour.
    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.state = GameState::new_game();
        self.history.clear();
        self.white_captured.clear();
        self.black_captured.clear();
        self.last_move = None;
        self.status = classify(&self.state);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Black pieces captured by White, in capture order.
    pub fn white_captured(&self) -> &[Piece] {
        &self.white_captured
    }

    /// White pieces captured by Black, in capture order.
    pub fn black_captured(&self) -> &[Piece] {
        &self.black_captured
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn is_engine_turn(&self) -> bool {
        self.state.side_to_move == self.engine_color
    }

    pub fn set_engine_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.engine.set_option(name, value)
    }

    /// Legal moves starting on `square`, for highlighting a selected piece.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        legal_moves(&self.state)
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// Every promotion move from `from` to `to`. More than one entry means the
    /// caller has to ask which piece to promote to.
    pub fn promotion_choices(&self, from: Square, to: Square) -> Vec<Move> {
        legal_moves(&self.state)
            .into_iter()
            .filter(|mv| mv.from == from && mv.to == to && mv.promotion_piece().is_some())
            .collect()
    }

    /// Commit `mv` for the side to move and return the resulting status.
    pub fn play(&mut self, mv: Move) -> ChessResult<GameStatus> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if !legal_moves(&self.state).contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }

        self.history.push(HistoryEntry {
            state: self.state,
            white_captured: self.white_captured.clone(),
            black_captured: self.black_captured.clone(),
            last_move: self.last_move,
        });

        if let Some(victim) = captured_piece(&self.state.board, mv) {
            match self.state.side_to_move {
                Color::White => self.white_captured.push(victim),
                Color::Black => self.black_captured.push(victim),
            }
        }

        let mover = self.state.side_to_move;
        self.state = apply_move(&self.state, mv);
        self.last_move = Some(mv);
        self.status = classify(&self.state);

        debug!(%mv, side = %mover, status = %self.status, "move played");
        if self.status.is_over() {
            match self.status {
                GameStatus::Checkmate => info!(winner = %mover, "game over: checkmate"),
                status => info!(%status, "game over"),
            }
        }

        Ok(self.status)
    }

    /// Parse `e2e4` / `e7e8q` text against the current position and play it.
    pub fn play_long_algebraic(&mut self, text: &str) -> ChessResult<GameStatus> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        let mv = parse_long_algebraic(&self.state, text)?;
        self.play(mv)
    }

    /// Let the engine move if it is on turn. Returns the move it played, or
    /// `None` when the human is on turn.
    pub fn engine_reply(&mut self) -> ChessResult<Option<Move>> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if !self.is_engine_turn() {
            return Ok(None);
        }

        let output = self.engine.choose_move(&self.state, &GoParams::default())?;
        let Some(mv) = output.best_move else {
            return Err(ChessError::GameOver(classify(&self.state)));
        };
        self.play(mv)?;
        Ok(Some(mv))
    }

    /// Take back moves so the human is on turn again: one ply when the engine
    /// is on move, two when the human is. Returns the number of plies undone.
    pub fn undo(&mut self) -> ChessResult<usize> {
        if self.history.is_empty() {
            return Err(ChessError::NothingToUndo);
        }

        let wanted = if self.is_engine_turn() { 1 } else { 2 };
        let mut undone = 0;
        while undone < wanted {
            let Some(entry) = self.history.pop() else {
                break;
            };
            self.state = entry.state;
            self.white_captured = entry.white_captured;
            self.black_captured = entry.black_captured;
            self.last_move = entry.last_move;
            undone += 1;
        }
        self.status = classify(&self.state);

        debug!(undone, remaining = self.history.len(), "undo");
        Ok(undone)
    }
}
