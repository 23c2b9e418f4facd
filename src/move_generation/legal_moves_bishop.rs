use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_regular;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::move_descriptions::MoveTarget;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<MoveTarget>) {
    push_regular(bishop_targets(board, bishop.position, bishop.owner), out);
}
