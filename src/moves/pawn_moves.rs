use crate::game_state::chess_types::{Color, Square};

/// File steps of the two forward diagonals.
pub const PAWN_CAPTURE_FILE_STEPS: [i8; 2] = [1, -1];

/// Squares a pawn of `color` on `from` attacks, whether or not anything
/// stands there. Off-board diagonals are omitted.
#[inline]
pub fn pawn_attacks(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let rank_step = color.pawn_direction();
    PAWN_CAPTURE_FILE_STEPS
        .into_iter()
        .map(move |file_step| from.offset(file_step, rank_step))
        .filter(|square| square.in_bounds())
}
