//! Fixed-depth alpha-beta engine.
//!
//! Wraps `search::alpha_beta::search` behind the `Engine` trait with a
//! configurable depth and a swappable board scorer.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::alpha_beta::{search, SearchConfig};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

pub struct AlphaBetaEngine<S: BoardScorer = PieceSquareScorer> {
    move_generator: LegalMoveGenerator,
    scorer: S,
    config: SearchConfig,
}

impl AlphaBetaEngine<PieceSquareScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(PieceSquareScorer, depth)
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S, depth: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer,
            config: SearchConfig { max_depth: depth },
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.max_depth
    }
}

impl Default for AlphaBetaEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "Mailbox AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        if !name.trim().eq_ignore_ascii_case("depth") {
            return Err(invalid());
        }
        let depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
        if depth == 0 {
            return Err(invalid());
        }
        self.config.max_depth = depth;
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
        };
        let result = search(game_state, &self.move_generator, &self.scorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            nodes: result.nodes,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score {}",
            result.depth, result.nodes, result.best_score
        ));
        if let Some(mv) = result.best_move {
            out.info_lines.push(format!("info pv {mv}"));
        }
        Ok(out)
    }
}
