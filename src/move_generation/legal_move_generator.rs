//! Full legal move generation pipeline.
//!
//! Per-piece generation dispatches on `PieceKind`; raw reachability is then
//! passed through the self-check filter when checks are considered.
//! `Board::get_all_legal_moves` flattens the result for one side and is the
//! authoritative move set for `Game`, the engines and perft.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
use crate::move_generation::legal_move_filter::filter_checks;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveAnnotations, MoveGenResult, MoveGenerator,
};
use crate::moves::move_descriptions::{ChessMove, MoveTarget};

impl Piece {
    /// Moves reachable by this piece's movement pattern, ignoring checks.
    #[inline]
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<MoveTarget> {
        self.legal_moves(board, false)
    }

    /// With `consider_checks` the result excludes moves that leave the
    /// mover's king attacked and includes castling; without it only raw
    /// reachability is computed.
    pub fn legal_moves(&self, board: &Board, consider_checks: bool) -> Vec<MoveTarget> {
        let mut out = Vec::with_capacity(16);
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(board, self, &mut out),
            PieceKind::Knight => generate_knight_moves(board, self, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, self, &mut out),
            PieceKind::Rook => generate_rook_moves(board, self, &mut out),
            PieceKind::Queen => generate_queen_moves(board, self, &mut out),
            PieceKind::King => generate_king_moves(board, self, consider_checks, &mut out),
        }

        if consider_checks {
            filter_checks(board, self, out)
        } else {
            out
        }
    }
}

impl Board {
    /// Every legal move of `owner`, piece by piece in slot order.
    pub fn get_all_legal_moves(&self, owner: Color) -> Vec<ChessMove> {
        self.pieces_of(owner)
            .flat_map(|piece| {
                piece
                    .legal_moves(self, true)
                    .into_iter()
                    .map(move |target| ChessMove::new(*piece, target))
            })
            .collect()
    }
}

/// Produces legal moves annotated with check and checkmate flags.
pub struct LegalMoveGenerator;
/// Produces legal moves without annotations.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(board, side, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(board, side, false)
    }
}

fn generate_legal_moves_internal(
    board: &Board,
    side: Color,
    annotate: bool,
) -> MoveGenResult<Vec<GeneratedMove>> {
    let legal = board.get_all_legal_moves(side);
    let mut generated = Vec::with_capacity(legal.len());

    for chess_move in legal {
        let mut next = board.clone();
        let applied = next.make_move(&chess_move.piece, chess_move.target)?;

        let annotations = if annotate {
            classify_move_annotations(&next, side.opposite())
        } else {
            MoveAnnotations::default()
        };

        generated.push(GeneratedMove {
            chess_move,
            applied,
            board_after_move: next,
            annotations,
        });
    }

    Ok(generated)
}

fn classify_move_annotations(next: &Board, defender: Color) -> MoveAnnotations {
    if !next.is_in_check(defender) {
        return MoveAnnotations::default();
    }
    MoveAnnotations {
        gives_check: true,
        is_checkmate: next.get_all_legal_moves(defender).is_empty(),
    }
}
