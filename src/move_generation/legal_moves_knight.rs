use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_regular;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::MoveTarget;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<MoveTarget>) {
    push_regular(knight_targets(board, knight.position, knight.owner), out);
}
