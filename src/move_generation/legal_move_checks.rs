//! Check and attack detection.
//!
//! Both queries scan the opponent's resident pieces and use raw reachability
//! only (`consider_checks = false`), so detecting a check never recurses into
//! check filtering. Neither query mutates the board.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::moves::pawn_moves::pawn_attacks;

impl Piece {
    /// Squares this piece attacks. Pawns attack their forward diagonals;
    /// every other piece attacks its pseudo-legal destinations.
    pub fn attacked_squares(&self, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => pawn_attacks(self.owner, self.position).collect(),
            _ => self
                .pseudo_legal_moves(board)
                .into_iter()
                .map(|target| target.destination(self.owner))
                .collect(),
        }
    }
}

impl Board {
    /// True if `owner`'s king is attacked by the opponent. A side without a
    /// king is never in check.
    pub fn is_in_check(&self, owner: Color) -> bool {
        self.king_square(owner)
            .is_some_and(|king| self.is_attacked(king, owner))
    }

    /// True if any piece of `owner`'s opponent attacks `square`.
    pub fn is_attacked(&self, square: Square, owner: Color) -> bool {
        self.pieces_of(owner.opposite())
            .any(|attacker| attacker.attacked_squares(self).contains(&square))
    }
}
