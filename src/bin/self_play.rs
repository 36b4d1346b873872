//! Engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white-depth 3 --black-depth 2`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --render`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::engine_alpha_beta::AlphaBetaEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use mailbox_chess::utils::render_game_state::render_game_state;
use mailbox_chess::ChessResult;

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play the alpha-beta engine against itself")]
struct Args {
    /// Search depth for White. 0 plays random moves.
    #[arg(long, default_value_t = 3)]
    white_depth: u8,

    /// Search depth for Black. 0 plays random moves.
    #[arg(long, default_value_t = 3)]
    black_depth: u8,

    /// Stop the game as a draw after this many engine plies.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random plies played before the engines take over.
    #[arg(long, default_value_t = 4)]
    opening_plies: u8,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Number of games; the seed advances by one per game.
    #[arg(long, default_value_t = 1)]
    games: u16,

    /// Print the final board of every game.
    #[arg(long)]
    render: bool,
}

fn engine_for(depth: u8, seed: u64) -> Box<dyn Engine> {
    if depth == 0 {
        Box::new(RandomEngine::seeded(seed))
    } else {
        Box::new(AlphaBetaEngine::new(depth))
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut white_wins = 0u16;
    let mut black_wins = 0u16;
    let mut draws = 0u16;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(game));
        let mut white = engine_for(args.white_depth, seed);
        let mut black = engine_for(args.black_depth, seed ^ 0xA5A5_5A5A_0123_4567);

        let result = play_engine_match(
            white.as_mut(),
            black.as_mut(),
            &MatchConfig {
                max_plies: args.max_plies,
                opening_plies: args.opening_plies,
                seed,
                ..MatchConfig::default()
            },
        )?;

        match result.outcome.winner() {
            Some(mailbox_chess::Color::White) => white_wins += 1,
            Some(mailbox_chess::Color::Black) => black_wins += 1,
            None => draws += 1,
        }

        let line: Vec<String> = result
            .opening_moves
            .iter()
            .chain(result.moves.iter())
            .map(ToString::to_string)
            .collect();
        println!("game {} seed={} {}", game + 1, seed, result.report());
        println!("moves: {}", line.join(" "));
        if args.render {
            println!("{}\n", render_game_state(&result.final_state));
        }
    }

    println!(
        "games={} white_wins={} black_wins={} draws={}",
        args.games, white_wins, black_wins, draws
    );
    Ok(())
}
