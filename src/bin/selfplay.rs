//! Headless self-play: feed uniformly random pieces to one selector and
//! commit every answer until the stack tops out or the piece budget runs out.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tetrabot::{apply_move_mut, build_selector, BeamConfig, Board, MctsConfig, Piece, Strategy};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Run one move selector against random pieces")]
struct Args {
    /// greedy, beam or mcts
    #[arg(long, default_value = "greedy")]
    strategy: Strategy,

    /// Stop after this many placements.
    #[arg(long, default_value_t = 500)]
    pieces: usize,

    /// Seeds both the piece sequence and Monte-Carlo playouts.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = Board::STANDARD_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = Board::STANDARD_HEIGHT)]
    height: usize,

    #[arg(long, default_value_t = BeamConfig::default().beam_width)]
    beam_width: usize,

    #[arg(long, default_value_t = MctsConfig::default().iterations)]
    iterations: usize,

    /// Print the final board.
    #[arg(long)]
    show: bool,
}

fn random_piece(rng: &mut StdRng) -> Piece {
    Piece::ALL[rng.gen_range(0..Piece::ALL.len())]
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut board = Board::new(args.width, args.height)?;
    let beam = BeamConfig {
        beam_width: args.beam_width,
        ..BeamConfig::default()
    };
    let mcts = MctsConfig {
        iterations: args.iterations,
        ..MctsConfig::default()
    };
    let mut selector = build_selector(args.strategy, beam, mcts, args.seed)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut current = random_piece(&mut rng);
    let mut next = random_piece(&mut rng);
    let mut placed = 0usize;
    let mut lines = 0u32;
    let mut topped_out = false;
    let start = Instant::now();

    while placed < args.pieces {
        let Some(mv) = selector.select_move(&board, current, Some(next)) else {
            topped_out = true;
            break;
        };
        lines += apply_move_mut(&mut board, &mv);
        placed += 1;
        current = next;
        next = random_piece(&mut rng);
    }

    let elapsed = start.elapsed();
    println!(
        "strategy={} seed={} pieces={} lines={} topped_out={} elapsed={:.2?} per_piece={:.2?}",
        args.strategy,
        args.seed,
        placed,
        lines,
        topped_out,
        elapsed,
        elapsed / placed.max(1) as u32,
    );
    if args.show {
        print!("{board}");
    }

    Ok(())
}
