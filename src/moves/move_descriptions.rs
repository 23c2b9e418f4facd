//! Move description types.
//!
//! A move is addressed to a piece and carries a `MoveTarget`: either a plain
//! destination square or, for a pawn arriving on its final rank, the
//! destination file plus the promotion kind. The rank of a promotion is
//! implied by the mover's color.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind, PromotionKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    Regular(Square),
    Promotion { file: i8, kind: PromotionKind },
}

impl MoveTarget {
    /// Destination square for a piece owned by `owner`.
    #[inline]
    pub const fn destination(self, owner: Color) -> Square {
        match self {
            MoveTarget::Regular(square) => square,
            MoveTarget::Promotion { file, .. } => Square::new(file, owner.promotion_rank()),
        }
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PromotionKind> {
        match self {
            MoveTarget::Regular(_) => None,
            MoveTarget::Promotion { kind, .. } => Some(kind),
        }
    }
}

/// A piece paired with one of its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub piece: Piece,
    pub target: MoveTarget,
}

impl ChessMove {
    #[inline]
    pub const fn new(piece: Piece, target: MoveTarget) -> Self {
        Self { piece, target }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.piece.position
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.target.destination(self.piece.owner)
    }
}

/// Long algebraic form, e.g. `e2e4` or `d7d8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.target.promotion_kind() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    Quiet,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
    Promotion(PromotionKind),
}

/// What `Board::make_move` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub special: SpecialMove,
}

impl AppliedMove {
    /// Pawn moves and captures reset the fifty-move count.
    #[inline]
    pub fn resets_no_progress(&self) -> bool {
        self.kind == PieceKind::Pawn || self.captured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_rank_follows_owner() {
        let target = MoveTarget::Promotion {
            file: 3,
            kind: PromotionKind::Knight,
        };
        assert_eq!(target.destination(Color::White), Square::new(3, 0));
        assert_eq!(target.destination(Color::Black), Square::new(3, 7));
        assert_eq!(target.promotion_kind(), Some(PromotionKind::Knight));
    }

    #[test]
    fn long_algebraic_display() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn, Square::new(3, 1));
        let promote = ChessMove::new(
            pawn,
            MoveTarget::Promotion {
                file: 3,
                kind: PromotionKind::Queen,
            },
        );
        assert_eq!(promote.to_string(), "d7d8q");

        let push = ChessMove::new(
            Piece::new(Color::White, PieceKind::Pawn, Square::new(4, 6)),
            MoveTarget::Regular(Square::new(4, 4)),
        );
        assert_eq!(push.to_string(), "e2e4");
    }
}
