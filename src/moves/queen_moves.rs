use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::ray_trace::trace_ray;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook lines followed by bishop diagonals.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn queen_targets(board: &Board, from: Square, owner: Color) -> Vec<Square> {
    let mut targets = Vec::with_capacity(27);
    for step in QUEEN_DIRECTIONS {
        trace_ray(board, from, owner, step, &mut targets);
    }
    targets
}
