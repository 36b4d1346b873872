//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other from the
//! initial position, with an optional seeded random opening prefix.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    DrawInsufficientMaterial,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            _ => None,
        }
    }

    fn from_status(status: GameStatus, side_to_move: Color) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate => Some(match side_to_move {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            }),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameStatus::DrawFiftyMove => Some(MatchOutcome::DrawFiftyMoveRule),
            GameStatus::DrawInsufficientMaterial => Some(MatchOutcome::DrawInsufficientMaterial),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Uniformly random plies played before the engines take over.
    pub opening_plies: u8,
    pub seed: u64,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_plies: 4,
            seed: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    /// Moves chosen by the engines, after the opening.
    pub moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} opening_plies={} engine_plies={} white_avg_ms={:.3} black_avg_ms={:.3}",
            self.outcome,
            self.opening_moves.len(),
            self.moves.len(),
            avg_ns_per_move_ms(self.white_total_time_ns, self.white_move_count),
            avg_ns_per_move_ms(self.black_total_time_ns, self.black_move_count),
        )
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let (mut state, opening_moves) =
        apply_seeded_random_opening(&GameState::new_game(), config.seed, config.opening_plies);

    let mut moves = Vec::<Move>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(finished) = MatchOutcome::from_status(classify(&state), state.side_to_move) {
            outcome = finished;
            break;
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(&state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessError::IllegalMove(format!("{} returned no move", engine.name()))
        })?;
        if !legal_moves(&state).contains(&chosen) {
            return Err(ChessError::IllegalMove(chosen.to_string()));
        }

        debug!(ply = moves.len(), side = %mover, mv = %chosen, score = ?out.score, "engine move");
        moves.push(chosen);
        state = apply_move(&state, chosen);
    }

    // A game can end on the final permitted ply.
    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(finished) = MatchOutcome::from_status(classify(&state), state.side_to_move) {
            outcome = finished;
        }
    }

    info!(
        white = engine_white.name(),
        black = engine_black.name(),
        ?outcome,
        plies = opening_moves.len() + moves.len(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play up to `plies` uniformly random legal moves, stopping early if the
/// game ends.
fn apply_seeded_random_opening(initial: &GameState, seed: u64, plies: u8) -> (GameState, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = *initial;
    let mut opening_moves = Vec::<Move>::new();

    for _ in 0..plies {
        if classify(&state).is_over() {
            break;
        }
        let candidates = legal_moves(&state);
        let Some(&chosen) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        opening_moves.push(chosen);
        state = apply_move(&state, chosen);
    }

    (state, opening_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::search::board_scoring::MaterialScorer;

    struct NullEngine;

    impl Engine for NullEngine {
        fn name(&self) -> &str {
            "null"
        }

        fn choose_move(&mut self, _: &GameState, _: &GoParams) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn random_versus_alpha_beta_runs_to_a_result() {
        let mut white = RandomEngine::seeded(11);
        let mut black = AlphaBetaEngine::with_scorer(MaterialScorer, 1);
        let config = MatchConfig {
            max_plies: 40,
            opening_plies: 4,
            seed: 42,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut white, &mut black, &config).expect("match should run");

        assert_eq!(result.opening_moves.len(), 4);
        assert!(result.moves.len() <= 40);
        assert_eq!(
            result.white_move_count + result.black_move_count,
            result.moves.len() as u32
        );
        assert!(!result.report().is_empty());
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = MatchConfig {
            max_plies: 12,
            opening_plies: 6,
            seed: 9,
            ..MatchConfig::default()
        };
        let first = play_engine_match(
            &mut AlphaBetaEngine::new(1),
            &mut AlphaBetaEngine::new(1),
            &config,
        )
        .expect("match should run");
        let second = play_engine_match(
            &mut AlphaBetaEngine::new(1),
            &mut AlphaBetaEngine::new(1),
            &config,
        )
        .expect("match should run");

        assert_eq!(first.opening_moves, second.opening_moves);
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn engine_without_a_move_is_an_error() {
        let mut white = NullEngine;
        let mut black = RandomEngine::seeded(1);
        let config = MatchConfig {
            opening_plies: 0,
            ..MatchConfig::default()
        };
        assert_eq!(
            play_engine_match(&mut white, &mut black, &config).map(|r| r.outcome),
            Err(ChessError::IllegalMove("null returned no move".to_owned()))
        );
    }

    #[test]
    fn outcome_follows_the_mated_side() {
        assert_eq!(
            MatchOutcome::from_status(GameStatus::Checkmate, Color::White),
            Some(MatchOutcome::BlackWinCheckmate)
        );
        assert_eq!(MatchOutcome::BlackWinCheckmate.winner(), Some(Color::Black));
        assert_eq!(MatchOutcome::from_status(GameStatus::Ongoing, Color::White), None);
        assert_eq!(MatchOutcome::DrawStalemate.winner(), None);
    }
}
