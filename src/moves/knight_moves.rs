use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::ray_trace::leap_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn knight_targets(board: &Board, from: Square, owner: Color) -> Vec<Square> {
    let mut targets = Vec::with_capacity(8);
    leap_targets(board, from, owner, &KNIGHT_OFFSETS, &mut targets);
    targets
}
