//! King step geometry.
//!
//! The eight adjacent-square offsets. Castling is not a geometric move and
//! is produced by `move_generation::legal_moves_king`.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::ray_trace::leap_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub fn king_targets(board: &Board, from: Square, owner: Color) -> Vec<Square> {
    let mut targets = Vec::with_capacity(8);
    leap_targets(board, from, owner, &KING_OFFSETS, &mut targets);
    targets
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::{Board, Color, Square};

    #[test]
    fn king_targets_from_a1_has_three_targets() {
        let board = Board::new_empty();
        assert_eq!(king_targets(&board, Square::new(0, 7), Color::White).len(), 3);
    }

    #[test]
    fn king_boxed_in_by_own_pieces_has_no_targets() {
        let board = Board::standard();
        assert!(king_targets(&board, Square::new(4, 7), Color::White).is_empty());
    }
}
