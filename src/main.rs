//! Random self-play demo.
//!
//! Usage:
//! `cargo run --release -- --seed 7 --max-plies 200`

use mailbox_chess::chess_errors::ChessErrors;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_types::{Color, Game, GameStatus};

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<T>().ok())
}

fn main() -> Result<(), ChessErrors> {
    let args: Vec<String> = std::env::args().collect();
    let seed: Option<u64> = parse_arg(&args, "--seed");
    let max_plies: usize = parse_arg(&args, "--max-plies").unwrap_or(300);

    let engine_for = |offset: u64| match seed {
        Some(seed) => RandomEngine::with_seed(seed.wrapping_add(offset)),
        None => RandomEngine::new(),
    };
    let mut white = engine_for(0);
    let mut black = engine_for(1);

    let mut game = Game::new();
    game.new_game();
    println!("{} vs {}", white.name(), black.name());
    println!("{}\n", game.board);

    let mut plies = 0;
    while plies < max_plies && game.status() == GameStatus::InProgress {
        let engine: &mut dyn Engine = match game.current_turn {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(chosen) = engine.choose_move(&game)? else {
            break;
        };
        game.apply(&chosen)?;
        plies += 1;

        println!("{plies}. {:?} {chosen}", chosen.piece.owner);
        println!("{}\n", game.board);
    }

    match game.status() {
        GameStatus::Checkmate { winner } => println!("checkmate after {plies} plies, {winner:?} wins"),
        GameStatus::Stalemate => println!("stalemate after {plies} plies"),
        GameStatus::InProgress => println!("stopped after {plies} plies with the game in progress"),
    }

    Ok(())
}
