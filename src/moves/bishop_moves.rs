use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::ray_trace::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Square, owner: Color) -> Vec<Square> {
    let mut targets = Vec::with_capacity(13);
    for step in BISHOP_DIRECTIONS {
        trace_ray(board, from, owner, step, &mut targets);
    }
    targets
}
