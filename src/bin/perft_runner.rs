//! Perft node-count runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --fen "<fen>" --threads`

use std::sync::Arc;
use std::time::Instant;

use mailbox_chess::chess_errors::ChessErrors;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::chess_types::Game;
use mailbox_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use mailbox_chess::move_generation::perft::{perft, perft_multi_threaded};

fn parse_arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_arg_str<'a>(args: &'a [String], flag: &str, default: &'a str) -> &'a str {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
        .unwrap_or(default)
}

fn main() -> Result<(), ChessErrors> {
    let args: Vec<String> = std::env::args().collect();
    let max_depth = parse_arg_u8(&args, "--depth", 3);
    let fen = parse_arg_str(&args, "--fen", STARTING_POSITION_FEN);
    let threaded = args.iter().any(|arg| arg == "--threads");

    let game = Game::from_fen(fen)?;
    println!("{}", game.board);
    println!("fen={fen} side={:?} threaded={threaded}", game.current_turn);
    println!("depth,nodes,captures,en_passant,castles,promotions,checks,checkmates,elapsed_ms");

    for depth in 1..=max_depth {
        let start = Instant::now();
        let counts = if threaded {
            perft_multi_threaded(Arc::new(LegalMoveGenerator), &game.board, game.current_turn, depth)?
        } else {
            perft(&LegalMoveGenerator, &game.board, game.current_turn, depth)?
        };
        println!(
            "{},{},{},{},{},{},{},{},{}",
            depth,
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            start.elapsed().as_millis()
        );
    }

    Ok(())
}
