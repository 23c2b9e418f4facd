//! Uniform random mover.
//!
//! Picks uniformly among the legal moves of the side to move. Mostly useful
//! for diagnostics and for driving the self-play demo through many positions.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Game;
use crate::moves::move_descriptions::ChessMove;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(&mut self, game: &Game) -> Result<Option<ChessMove>, ChessErrors> {
        let legal_moves = game.get_all_legal_moves();
        debug!(
            "random engine choosing among {} moves for {:?}",
            legal_moves.len(),
            game.current_turn
        );
        Ok(legal_moves.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;

    #[test]
    fn picks_a_legal_move_from_the_start() {
        let mut game = Game::new();
        game.new_game();
        let mut engine = RandomEngine::with_seed(7);

        let chosen = engine
            .choose_move(&game)
            .expect("engine should not fail")
            .expect("start position has moves");
        assert!(game.get_all_legal_moves().contains(&chosen));
        game.apply(&chosen).expect("chosen move should be playable");
        assert_eq!(game.current_turn, Color::Black);
    }

    #[test]
    fn same_seed_plays_the_same_game() {
        let play = |seed| {
            let mut game = Game::new();
            game.new_game();
            let mut engine = RandomEngine::with_seed(seed);
            let mut played = Vec::new();
            for _ in 0..12 {
                let Some(mv) = engine.choose_move(&game).expect("engine should not fail") else {
                    break;
                };
                game.apply(&mv).expect("chosen move should be playable");
                played.push(mv.to_string());
            }
            played
        };
        assert_eq!(play(42), play(42));
    }

    #[test]
    fn no_move_when_checkmated() {
        let mut board = Board::new_empty();
        board.add_to_board(Piece::new(Color::White, PieceKind::King, Square::new(7, 6)));
        board.add_to_board(Piece::new(Color::White, PieceKind::Pawn, Square::new(4, 6)));
        board.add_to_board(Piece::new(Color::Black, PieceKind::Rook, Square::new(6, 0)));
        board.add_to_board(Piece::new(Color::Black, PieceKind::Rook, Square::new(7, 0)));
        let game = Game::from_board(board, Color::White);

        let mut engine = RandomEngine::with_seed(1);
        assert_eq!(engine.choose_move(&game).expect("engine should not fail"), None);
    }
}
