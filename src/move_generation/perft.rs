//! Perft: exhaustive move-path enumeration for generator verification.
//!
//! Counts leaf nodes at a fixed depth and classifies the move that reached
//! each leaf, so totals can be checked against published reference tables.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, captured_piece};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, mv, depth, &mut total);
    }
    total
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, game_state, mv, depth, &mut counts);
            (mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    mv: Move,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    let next = apply_move(parent, mv);

    if remaining == 1 {
        counts.nodes += 1;
        if captured_piece(&parent.board, mv).is_some() {
            counts.captures += 1;
        }
        match mv.kind {
            MoveKind::EnPassant => counts.en_passant += 1,
            MoveKind::Castle(_) => counts.castles += 1,
            MoveKind::Promotion(_) => counts.promotions += 1,
            MoveKind::Normal | MoveKind::DoublePawnPush => {}
        }
        if is_king_in_check(&next.board, next.side_to_move) {
            counts.checks += 1;
            if generator.generate_legal_moves(&next).is_empty() {
                counts.checkmates += 1;
            }
        }
        return;
    }

    let mut subtotal = PerftCounts::default();
    for child in generator.generate_legal_moves(&next) {
        perft_recurse(generator, &next, child, remaining - 1, &mut subtotal);
    }
    counts.merge(subtotal);
}
