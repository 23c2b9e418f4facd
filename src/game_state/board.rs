//! Mailbox board representation.
//!
//! `Board` owns every resident piece in a 64-slot array indexed by
//! `file + rank * 8`. The list of live pieces is read straight off the
//! occupied slots, so it can never disagree with the slots themselves.
//! Move execution lives in `move_generation::legal_move_apply`, attack
//! detection in `move_generation::legal_move_checks`.

use std::fmt;

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    /// Square of the pawn that double-stepped on the previous move.
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    /// An empty board. All castling rights start present; they are lost as
    /// soon as the relevant king or corner rook leaves its slot.
    pub fn new_empty() -> Self {
        Self {
            squares: [None; 64],
            en_passant_target: None,
            castling_rights: CASTLE_ALL,
        }
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::new_empty();
        board.reset();
        board
    }

    /// Clears the board and sets up the standard starting layout.
    pub fn reset(&mut self) {
        *self = Self::new_empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                self.add_to_board(Piece::new(
                    color,
                    *kind,
                    Square::new(file as i8, color.home_rank()),
                ));
                self.add_to_board(Piece::new(
                    color,
                    PieceKind::Pawn,
                    Square::new(file as i8, color.pawn_start_rank()),
                ));
            }
        }
    }

    /// True if the square is on the board and unoccupied.
    #[inline]
    pub fn check_if_empty(&self, square: Square) -> bool {
        match to_index(square) {
            Some(index) => self.squares[index].is_none(),
            None => false,
        }
    }

    /// True if the square holds a piece not owned by `owner`. Empty and
    /// off-board squares are never opponents.
    #[inline]
    pub fn check_if_opponent(&self, square: Square, owner: Color) -> bool {
        self.get_piece_at_position(square)
            .is_some_and(|piece| piece.owner != owner)
    }

    #[inline]
    pub fn get_piece_at_position(&self, square: Square) -> Option<&Piece> {
        to_index(square).and_then(|index| self.squares[index].as_ref())
    }

    /// Places the piece at its own `position`. Returns `false` and leaves the
    /// board unchanged if that square is occupied or off the board.
    pub fn add_to_board(&mut self, piece: Piece) -> bool {
        let Some(index) = to_index(piece.position) else {
            debug!("dropping {:?}: {:?} is off the board", piece.kind, piece.position);
            return false;
        };
        if self.squares[index].is_some() {
            debug!("dropping {:?}: {} is occupied", piece.kind, piece.position);
            return false;
        }
        self.squares[index] = Some(piece);
        true
    }

    /// Removes and returns the resident piece, discarding any castling right
    /// or en-passant target that depended on it.
    pub fn remove_from_board(&mut self, square: Square) -> Option<Piece> {
        let index = to_index(square)?;
        let removed = self.squares[index].take()?;

        if self.en_passant_target == Some(square) {
            self.en_passant_target = None;
        }

        match removed.kind {
            PieceKind::King => {
                self.castling_rights &= !(castling_right(removed.owner, CastleSide::Kingside)
                    | castling_right(removed.owner, CastleSide::Queenside));
            }
            PieceKind::Rook if square.rank == removed.owner.home_rank() => {
                for side in [CastleSide::Kingside, CastleSide::Queenside] {
                    if square.file == side.corner_file() {
                        self.castling_rights &= !castling_right(removed.owner, side);
                    }
                }
            }
            _ => {}
        }

        Some(removed)
    }

    /// Overwrites the slot at the piece's position.
    pub(crate) fn place_piece(&mut self, piece: Piece) -> Result<(), ChessErrors> {
        let index = to_index(piece.position).ok_or(ChessErrors::OutOfBounds(piece.position))?;
        self.squares[index] = Some(piece);
        Ok(())
    }

    /// Resident pieces in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, owner: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.owner == owner)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, owner: Color) -> Option<Square> {
        self.pieces_of(owner)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.position)
    }

    /// The pawn that advanced two squares on the immediately preceding move.
    #[inline]
    pub fn en_passant_target(&self) -> Option<&Piece> {
        self.en_passant_target
            .and_then(|square| self.get_piece_at_position(square))
    }

    /// Marks the pawn at `square` as capturable en passant.
    pub fn set_en_passant_target(&mut self, square: Option<Square>) -> Result<(), ChessErrors> {
        if let Some(square) = square {
            match self.get_piece_at_position(square) {
                Some(piece) if piece.kind == PieceKind::Pawn => {}
                _ => return Err(ChessErrors::InvalidEnPassant(square)),
            }
        }
        self.en_passant_target = square;
        Ok(())
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, owner: Color, side: CastleSide) -> bool {
        self.castling_rights & castling_right(owner, side) != 0
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights & CASTLE_ALL;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn standard_layout_is_bit_exact() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);

        let expected = [
            ("a1", Color::White, PieceKind::Rook),
            ("b1", Color::White, PieceKind::Knight),
            ("c1", Color::White, PieceKind::Bishop),
            ("d1", Color::White, PieceKind::Queen),
            ("e1", Color::White, PieceKind::King),
            ("f1", Color::White, PieceKind::Bishop),
            ("g1", Color::White, PieceKind::Knight),
            ("h1", Color::White, PieceKind::Rook),
            ("a8", Color::Black, PieceKind::Rook),
            ("d8", Color::Black, PieceKind::Queen),
            ("e8", Color::Black, PieceKind::King),
            ("h8", Color::Black, PieceKind::Rook),
        ];
        for (name, owner, kind) in expected {
            let piece = board
                .get_piece_at_position(sq(name))
                .expect("starting square should be occupied");
            assert_eq!((piece.owner, piece.kind), (owner, kind), "mismatch on {name}");
        }

        for file in 0..8 {
            let white = board.get_piece_at_position(Square::new(file, 6)).expect("white pawn");
            let black = board.get_piece_at_position(Square::new(file, 1)).expect("black pawn");
            assert_eq!((white.owner, white.kind), (Color::White, PieceKind::Pawn));
            assert_eq!((black.owner, black.kind), (Color::Black, PieceKind::Pawn));
            for rank in 2..6 {
                assert!(board.check_if_empty(Square::new(file, rank)));
            }
        }
        assert!(board.pieces().all(|piece| piece.first_move));
    }

    #[test]
    fn add_a_piece_and_query_it() {
        let mut board = Board::new_empty();
        let e6 = sq("e6");
        assert!(board.add_to_board(Piece::new(Color::White, PieceKind::Pawn, e6)));

        assert!(!board.check_if_empty(e6));
        assert_eq!(
            board.get_piece_at_position(e6).map(|piece| piece.kind),
            Some(PieceKind::Pawn)
        );
        assert!(!board.check_if_opponent(e6, Color::White));
        assert!(board.check_if_opponent(e6, Color::Black));
    }

    #[test]
    fn adding_onto_an_occupied_square_is_dropped() {
        let mut board = Board::new_empty();
        let d4 = sq("d4");
        assert!(board.add_to_board(Piece::new(Color::White, PieceKind::Knight, d4)));
        assert!(!board.add_to_board(Piece::new(Color::Black, PieceKind::Queen, d4)));
        assert!(!board.add_to_board(Piece::new(Color::Black, PieceKind::Queen, Square::new(8, 3))));

        assert_eq!(board.piece_count(), 1);
        assert_eq!(
            board.get_piece_at_position(d4).map(|piece| piece.owner),
            Some(Color::White)
        );
    }

    #[test]
    fn off_board_queries_are_conservative() {
        let board = Board::standard();
        for square in [Square::new(-1, 0), Square::new(8, 8), Square::new(3, -1)] {
            assert!(!board.check_if_empty(square));
            assert!(!board.check_if_opponent(square, Color::White));
            assert!(board.get_piece_at_position(square).is_none());
        }
    }

    #[test]
    fn removing_a_corner_rook_drops_that_right_only() {
        let mut board = Board::standard();
        let removed = board.remove_from_board(sq("h1")).expect("rook on h1");
        assert_eq!(removed.kind, PieceKind::Rook);
        assert!(!board.has_castling_right(Color::White, CastleSide::Kingside));
        assert!(board.has_castling_right(Color::White, CastleSide::Queenside));
        assert!(board.has_castling_right(Color::Black, CastleSide::Kingside));

        // A replacement rook does not restore the right.
        board.add_to_board(Piece::new(Color::White, PieceKind::Rook, sq("h1")));
        assert!(!board.has_castling_right(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn en_passant_target_must_be_a_pawn() {
        let mut board = Board::standard();
        assert!(board.set_en_passant_target(Some(sq("e1"))).is_err());
        assert!(board.set_en_passant_target(Some(sq("e4"))).is_err());
        board
            .set_en_passant_target(Some(sq("e2")))
            .expect("pawn on e2 should be accepted");
        assert_eq!(board.en_passant_target().map(|piece| piece.kind), Some(PieceKind::Pawn));

        board.remove_from_board(sq("e2"));
        assert!(board.en_passant_target().is_none());
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::standard();
        let mut copy = board.clone();
        copy.remove_from_board(sq("d1"));
        assert_eq!(board.piece_count(), 32);
        assert_eq!(copy.piece_count(), 31);
    }
}
