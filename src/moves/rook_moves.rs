use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::ray_trace::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_targets(board: &Board, from: Square, owner: Color) -> Vec<Square> {
    let mut targets = Vec::with_capacity(14);
    for step in ROOK_DIRECTIONS {
        trace_ray(board, from, owner, step, &mut targets);
    }
    targets
}
