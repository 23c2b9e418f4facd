//! Square walkers shared by the sliding and leaping generators.

use crate::game_state::chess_types::{Board, Color, Square};

/// Walks from `from` (exclusive) one step at a time. Empty squares are
/// collected and the walk continues; an opponent square is collected and the
/// walk stops; an own piece or the board edge stops the walk.
pub fn trace_ray(board: &Board, from: Square, owner: Color, step: (i8, i8), out: &mut Vec<Square>) {
    let (file_step, rank_step) = step;
    let mut target = from.offset(file_step, rank_step);

    loop {
        if board.check_if_empty(target) {
            out.push(target);
        } else if board.check_if_opponent(target, owner) {
            out.push(target);
            break;
        } else {
            break;
        }
        target = target.offset(file_step, rank_step);
    }
}

/// Each offset square is kept iff it is empty or holds an opponent.
pub fn leap_targets(
    board: &Board,
    from: Square,
    owner: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_step, rank_step) in offsets {
        let target = from.offset(file_step, rank_step);
        if board.check_if_empty(target) || board.check_if_opponent(target, owner) {
            out.push(target);
        }
    }
}
