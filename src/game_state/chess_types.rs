//! Core value types shared by the board, the move generators and the game.
//!
//! Coordinates follow a mailbox convention: a square is a `(file, rank)`
//! pair packed into a flat index `file + rank * 8`. Rank index 0 is Black's
//! back rank and rank index 7 is White's, so White pawns travel toward
//! decreasing rank indices.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game::{Game, GameStatus, Player};

/// Side owning a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank holding this color's king and rooks in the starting layout.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The four kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionKind {
    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Knight => PieceKind::Knight,
        }
    }

    /// Lowercase suffix used by long algebraic notation (`d7d8q`).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PromotionKind::Queen => 'q',
            PromotionKind::Rook => 'r',
            PromotionKind::Bishop => 'b',
            PromotionKind::Knight => 'n',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File distance from an unmoved king to its castling rook.
    #[inline]
    pub const fn rook_distance(self) -> i8 {
        match self {
            CastleSide::Kingside => 3,
            CastleSide::Queenside => -4,
        }
    }

    /// File step of the king while castling.
    #[inline]
    pub const fn step(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// File of the rook's corner in the starting layout.
    #[inline]
    pub const fn corner_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }
}

/// Per-color, per-side castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castling_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}

/// A board coordinate. Components are signed so offsets may step off the
/// board; such squares are valid values that simply fail `in_bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        in_bounds(self)
    }

    #[inline]
    pub const fn to_index(self) -> Option<usize> {
        to_index(self)
    }

    /// Inverse of `to_index`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index > 63 {
            return None;
        }
        Some(Self::new((index % 8) as i8, (index / 8) as i8))
    }

    /// Saturates at the `i8` limits, so an off-board square stays off-board.
    #[inline]
    pub const fn offset(self, file_step: i8, rank_step: i8) -> Self {
        Self::new(self.file.saturating_add(file_step), self.rank.saturating_add(rank_step))
    }
}

/// True iff both components lie in `0..=7`.
#[inline]
pub const fn in_bounds(square: Square) -> bool {
    square.file >= 0 && square.file < 8 && square.rank >= 0 && square.rank < 8
}

/// Packed slot index `file + rank * 8`, or `None` off the board.
#[inline]
pub const fn to_index(square: Square) -> Option<usize> {
    if !in_bounds(square) {
        return None;
    }
    Some(square.file as usize + square.rank as usize * 8)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({},{})", self.file, self.rank);
        }
        let file_char = char::from(b'a' + self.file as u8);
        let rank_char = char::from(b'8' - self.rank as u8);
        write!(f, "{file_char}{rank_char}")
    }
}

/// A piece resident on a board.
///
/// `first_move` gates the pawn double step and, for kings and rooks,
/// castling eligibility. It is cleared by the first executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Color,
    pub position: Square,
    pub kind: PieceKind,
    pub first_move: bool,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Color, kind: PieceKind, position: Square) -> Self {
        Self {
            owner,
            position,
            kind,
            first_move: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_packs_file_plus_rank_times_eight() {
        assert_eq!(to_index(Square::new(0, 0)), Some(0));
        assert_eq!(to_index(Square::new(7, 7)), Some(63));
        assert_eq!(to_index(Square::new(4, 5)), Some(44));
        assert_eq!(Square::from_index(44), Some(Square::new(4, 5)));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn off_board_squares_fail_bounds_check() {
        assert!(in_bounds(Square::new(7, 0)));
        assert!(!in_bounds(Square::new(8, 0)));
        assert!(!in_bounds(Square::new(-3, 5)));
        assert!(!in_bounds(Square::new(0, 9)));
        // -1 + 1*8 would alias a valid slot without the bounds check.
        assert_eq!(to_index(Square::new(-1, 1)), None);
    }

    #[test]
    fn offsets_at_the_numeric_edge_stay_off_board() {
        let far = Square::new(i8::MAX, 0).offset(1, 0);
        assert_eq!(far, Square::new(i8::MAX, 0));
        assert!(!far.in_bounds());
        assert!(!Square::new(0, i8::MIN).offset(-2, -1).in_bounds());
    }

    #[test]
    fn display_uses_flipped_rank_labels() {
        assert_eq!(Square::new(4, 7).to_string(), "e1");
        assert_eq!(Square::new(3, 1).to_string(), "d7");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
    }

    #[test]
    fn colors_mirror_pawn_geometry() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.pawn_direction(), -Color::Black.pawn_direction());
        assert_eq!(Color::White.promotion_rank(), Color::Black.home_rank());
        assert_eq!(Color::Black.promotion_rank(), Color::White.home_rank());
    }
}
