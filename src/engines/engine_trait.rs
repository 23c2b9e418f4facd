//! Engine abstraction used by the self-play binary.
//!
//! An engine looks at a `Game` and picks one of the side-to-move's legal
//! moves, or `None` when there is nothing to play.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Game;
use crate::moves::move_descriptions::ChessMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game: &Game) -> Result<Option<ChessMove>, ChessErrors>;
}
