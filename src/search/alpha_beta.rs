//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are White-positive at every node. White maximizes and Black
//! minimizes, derived from the side to move at each ply including the root.
//! Each branch works on its own copy of the position, so nothing has to be
//! unmade when a call returns.

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::move_ordering::order_moves;

/// Magnitude of a mate delivered at the root. A mate found `n` plies from the
/// root scores `MATE_SCORE - n`, so quicker mates rank higher.
pub const MATE_SCORE: i32 = 99_999;

const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root has no legal moves.
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Best move for the side to move with the default generator and evaluator.
pub fn choose_move(game_state: &GameState, depth: u8) -> Option<Move> {
    search(
        game_state,
        &LegalMoveGenerator,
        &PieceSquareScorer,
        SearchConfig { max_depth: depth },
    )
    .best_move
}

/// Run a fixed-depth search. Depth 0 is treated as 1 so that a move is
/// returned whenever one exists.
pub fn search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.max_depth.max(1);
    let mut nodes = 1u64;

    let mut moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: terminal_score(game_state, 0),
            depth,
            nodes,
        };
    }
    order_moves(&game_state.board, &mut moves);

    let maximizing = game_state.side_to_move == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_move = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let child = apply_move(game_state, mv);
        let score = alpha_beta(
            &child,
            generator,
            scorer,
            depth - 1,
            alpha,
            beta,
            1,
            &mut nodes,
        );
        trace!(%mv, score, "root move");

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }
    }

    debug!(
        depth,
        nodes,
        score = best_score,
        best = ?best_move.map(|mv| mv.to_string()),
        "search complete"
    );

    SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Terminal positions are detected even at the horizon so mates always
    // outrank material.
    let mut moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return terminal_score(game_state, ply);
    }
    if depth == 0 {
        return scorer.score(&game_state.board);
    }

    order_moves(&game_state.board, &mut moves);

    if game_state.side_to_move == Color::White {
        let mut best = -INFINITY;
        for mv in moves {
            let child = apply_move(game_state, mv);
            let value = alpha_beta(&child, generator, scorer, depth - 1, alpha, beta, ply + 1, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let child = apply_move(game_state, mv);
            let value = alpha_beta(&child, generator, scorer, depth - 1, alpha, beta, ply + 1, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Plain minimax without pruning or ordering. Returns the same value as
/// `search` for the same depth, at a much higher node cost; kept as the
/// reference the pruned search is checked against.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
) -> i32 {
    minimax_node(game_state, generator, scorer, depth.max(1), 0)
}

fn minimax_node<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    ply: u8,
) -> i32 {
    let moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return terminal_score(game_state, ply);
    }
    if depth == 0 {
        return scorer.score(&game_state.board);
    }

    let values = moves.into_iter().map(|mv| {
        let child = apply_move(game_state, mv);
        minimax_node(&child, generator, scorer, depth - 1, ply + 1)
    });
    match game_state.side_to_move {
        Color::White => values.max(),
        Color::Black => values.min(),
    }
    .unwrap_or_else(|| scorer.score(&game_state.board))
}

/// Score of a position with no legal moves: mate for the side to move if it
/// is in check, otherwise a stalemate draw.
#[inline]
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if !is_king_in_check(&game_state.board, game_state.side_to_move) {
        return 0;
    }
    let mate = MATE_SCORE - ply as i32;
    match game_state.side_to_move {
        Color::White => -mate,
        Color::Black => mate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_status::{classify, GameStatus};
    use crate::search::board_scoring::MaterialScorer;

    const WHITE_BACK_RANK: [&str; 8] = [
        "......k.", ".....ppp", "........", "........", "........", "........", ".....PPP",
        "R.....K.",
    ];

    const BLACK_BACK_RANK: [&str; 8] = [
        "r.....k.", ".....ppp", "........", "........", "........", "........", ".....PPP",
        "......K.",
    ];

    const KIWIPETE: [&str; 8] = [
        "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
        "R...K..R",
    ];

    fn position(rows: [&str; 8], side: Color) -> GameState {
        GameState::from_diagram(&rows, side, CastlingRights::NONE).expect("diagram should parse")
    }

    #[test]
    fn white_finds_back_rank_mate() {
        let game = position(WHITE_BACK_RANK, Color::White);
        let result = search(&game, &LegalMoveGenerator, &PieceSquareScorer, SearchConfig::default());
        let mv = result.best_move.expect("white has moves");
        assert_eq!(mv.to_string(), "a1a8");
        assert_eq!(result.best_score, MATE_SCORE - 1);
        assert_eq!(classify(&apply_move(&game, mv)), GameStatus::Checkmate);
    }

    #[test]
    fn black_finds_back_rank_mate() {
        let game = position(BLACK_BACK_RANK, Color::Black);
        let result = search(&game, &LegalMoveGenerator, &PieceSquareScorer, SearchConfig::default());
        let mv = result.best_move.expect("black has moves");
        assert_eq!(mv.to_string(), "a8a1");
        assert_eq!(result.best_score, -(MATE_SCORE - 1));
        assert_eq!(classify(&apply_move(&game, mv)), GameStatus::Checkmate);
    }

    #[test]
    fn both_colours_take_a_hanging_queen() {
        let white_to_move = position(
            [
                "......k.", "........", "........", "...q....", "....P...", "........", "........",
                "......K.",
            ],
            Color::White,
        );
        let mv = choose_move(&white_to_move, 3).expect("white has moves");
        assert_eq!(mv.to_string(), "e4d5");

        let black_to_move = position(
            [
                "......k.", "........", "........", "....p...", "...Q....", "........", "........",
                "......K.",
            ],
            Color::Black,
        );
        let mv = choose_move(&black_to_move, 3).expect("black has moves");
        assert_eq!(mv.to_string(), "e5d4");
    }

    #[test]
    fn no_legal_moves_returns_no_move() {
        let stalemate = position(
            [
                ".......k", "........", "........", "........", "........", ".q......", "........",
                "K.......",
            ],
            Color::White,
        );
        let result = search(&stalemate, &LegalMoveGenerator, &PieceSquareScorer, SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn depth_zero_still_returns_a_move() {
        let result = search(
            &GameState::new_game(),
            &LegalMoveGenerator,
            &PieceSquareScorer,
            SearchConfig { max_depth: 0 },
        );
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let positions = [
            GameState::new_game(),
            GameState::from_diagram(&KIWIPETE, Color::White, CastlingRights::ALL)
                .expect("diagram should parse"),
            position(WHITE_BACK_RANK, Color::White),
            position(BLACK_BACK_RANK, Color::Black),
        ];
        for game in positions {
            let pruned = search(&game, &LegalMoveGenerator, &PieceSquareScorer, SearchConfig { max_depth: 2 });
            let full = minimax(&game, &LegalMoveGenerator, &PieceSquareScorer, 2);
            assert_eq!(pruned.best_score, full);

            let pruned = search(&game, &LegalMoveGenerator, &MaterialScorer, SearchConfig { max_depth: 2 });
            let full = minimax(&game, &LegalMoveGenerator, &MaterialScorer, 2);
            assert_eq!(pruned.best_score, full);
        }
    }

    #[test]
    fn pruning_matches_plain_minimax_at_depth_three() {
        let game = position(WHITE_BACK_RANK, Color::Black);
        let pruned = search(&game, &LegalMoveGenerator, &PieceSquareScorer, SearchConfig { max_depth: 3 });
        let full = minimax(&game, &LegalMoveGenerator, &PieceSquareScorer, 3);
        assert_eq!(pruned.best_score, full);
    }

    #[test]
    fn search_does_not_mutate_its_input() {
        let game = GameState::new_game();
        let before = game;
        let _ = choose_move(&game, 2);
        assert_eq!(game, before);
    }
}
