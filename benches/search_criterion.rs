use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::chess_types::{CastlingRights, Color, GameState};
use mailbox_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use mailbox_chess::search::alpha_beta::{search, SearchConfig};
use mailbox_chess::search::board_scoring::PieceSquareScorer;

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    diagram: [&'static str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        diagram: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
    },
    SearchCase {
        name: "classical_mid",
        diagram: [
            "r....rk.", ".pp.qppp", "p.np.n..", "..b.p.B.", "..B.P.b.", "P.NP.N..", ".PP.QPPP",
            "R....RK.",
        ],
        side_to_move: Color::White,
        castling_rights: CastlingRights::NONE,
    },
    SearchCase {
        name: "tactical",
        diagram: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        side_to_move: Color::White,
        castling_rights: CastlingRights::ALL,
    },
    SearchCase {
        name: "end_kpk",
        diagram: [
            "........", "........", "........", "........", "........", "....k...", "....P...",
            "....K...",
        ],
        side_to_move: Color::White,
        castling_rights: CastlingRights::NONE,
    },
];

fn bench_search(c: &mut Criterion) {
    let depth = std::env::var("MAILBOX_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1);

    let mut group = c.benchmark_group("alpha_beta_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_diagram(&case.diagram, case.side_to_move, case.castling_rights)
            .expect("benchmark diagram should parse");
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &game,
            |b, game| {
                b.iter(|| {
                    let result = search(
                        black_box(game),
                        &LegalMoveGenerator,
                        &PieceSquareScorer,
                        SearchConfig { max_depth: depth },
                    );
                    black_box(result.best_move)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
