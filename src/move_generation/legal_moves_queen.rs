use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_regular;
use crate::moves::move_descriptions::MoveTarget;
use crate::moves::queen_moves::queen_targets;

pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut Vec<MoveTarget>) {
    push_regular(queen_targets(board, queen.position, queen.owner), out);
}
