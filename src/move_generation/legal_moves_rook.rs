//! Rook move generation.
//!
//! Emits regular targets along the four lines until blocked, including the
//! capture that ends a line.

use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_regular;
use crate::moves::move_descriptions::MoveTarget;
use crate::moves::rook_moves::rook_targets;

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<MoveTarget>) {
    push_regular(rook_targets(board, rook.position, rook.owner), out);
}
