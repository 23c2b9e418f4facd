//! King move generation, including castling candidates.
//!
//! Castling is only offered when checks are being considered: the king must
//! be unmoved and not in check, the side's castling right must still be held,
//! the partner rook must be an unmoved own rook 3 files (kingside) or 4 files
//! (queenside) away, every square between them must be empty, and the square
//! the king passes over must not be attacked. Landing in check is left to the
//! check filter.

use crate::game_state::chess_types::{Board, CastleSide, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::push_regular;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::MoveTarget;

pub fn generate_king_moves(
    board: &Board,
    king: &Piece,
    consider_checks: bool,
    out: &mut Vec<MoveTarget>,
) {
    push_regular(king_targets(board, king.position, king.owner), out);

    if consider_checks {
        generate_castling_moves(board, king, out);
    }
}

fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<MoveTarget>) {
    // Cannot castle a moved king or out of check.
    if !king.first_move || board.is_in_check(king.owner) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if castling_path_is_clear(board, king, side) {
            out.push(MoveTarget::Regular(king.position.offset(2 * side.step(), 0)));
        }
    }
}

fn castling_path_is_clear(board: &Board, king: &Piece, side: CastleSide) -> bool {
    if !board.has_castling_right(king.owner, side) {
        return false;
    }

    let rook_square = king.position.offset(side.rook_distance(), 0);
    match board.get_piece_at_position(rook_square) {
        Some(rook)
            if rook.kind == PieceKind::Rook && rook.owner == king.owner && rook.first_move => {}
        _ => return false,
    }

    let mut between = king.position.offset(side.step(), 0);
    while between != rook_square {
        if !board.check_if_empty(between) {
            return false;
        }
        between = between.offset(side.step(), 0);
    }

    let passing: Square = king.position.offset(side.step(), 0);
    !board.is_attacked(passing, king.owner)
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::MoveTarget;

    const E1: Square = Square::new(4, 7);
    const G1: Square = Square::new(6, 7);
    const C1: Square = Square::new(2, 7);

    fn castling_board() -> Board {
        let mut board = Board::new_empty();
        board.add_to_board(Piece::new(Color::White, PieceKind::King, E1));
        board.add_to_board(Piece::new(Color::White, PieceKind::Rook, Square::new(7, 7)));
        board.add_to_board(Piece::new(Color::White, PieceKind::Rook, Square::new(0, 7)));
        board
    }

    fn king_moves(board: &Board, consider_checks: bool) -> Vec<MoveTarget> {
        let king = *board.get_piece_at_position(E1).expect("king on e1");
        let mut out = Vec::new();
        generate_king_moves(board, &king, consider_checks, &mut out);
        out
    }

    #[test]
    fn both_castles_offered_on_open_back_rank() {
        let moves = king_moves(&castling_board(), true);
        assert!(moves.contains(&MoveTarget::Regular(G1)));
        assert!(moves.contains(&MoveTarget::Regular(C1)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn raw_reachability_never_castles() {
        let moves = king_moves(&castling_board(), false);
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(&MoveTarget::Regular(G1)));
    }

    #[test]
    fn piece_between_king_and_rook_blocks_that_side() {
        let mut board = castling_board();
        board.add_to_board(Piece::new(Color::White, PieceKind::Knight, Square::new(1, 7)));
        let moves = king_moves(&board, true);
        assert!(moves.contains(&MoveTarget::Regular(G1)));
        assert!(!moves.contains(&MoveTarget::Regular(C1)));
    }

    #[test]
    fn attacked_passing_square_blocks_that_side() {
        let mut board = castling_board();
        board.add_to_board(Piece::new(Color::Black, PieceKind::Rook, Square::new(5, 0)));
        let moves = king_moves(&board, true);
        assert!(!moves.contains(&MoveTarget::Regular(G1)));
        assert!(moves.contains(&MoveTarget::Regular(C1)));
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let mut board = castling_board();
        let mut rook = board
            .remove_from_board(Square::new(0, 7))
            .expect("rook on a1");
        rook.first_move = false;
        rook.position = Square::new(0, 7);
        board.add_to_board(rook);
        let moves = king_moves(&board, true);
        assert!(!moves.contains(&MoveTarget::Regular(C1)));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut board = castling_board();
        board.add_to_board(Piece::new(Color::Black, PieceKind::Rook, Square::new(4, 0)));
        let moves = king_moves(&board, true);
        assert!(!moves.contains(&MoveTarget::Regular(G1)));
        assert!(!moves.contains(&MoveTarget::Regular(C1)));
    }
}
