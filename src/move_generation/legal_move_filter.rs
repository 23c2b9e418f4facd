//! Self-check filtering.
//!
//! Each candidate is played on an independent clone of the board; the
//! candidate survives only if the mover's king is not attacked afterwards.
//! The real board and the real piece are never touched.

use log::trace;

use crate::game_state::chess_types::{Board, Piece};
use crate::moves::move_descriptions::MoveTarget;

pub fn filter_checks(board: &Board, piece: &Piece, candidates: Vec<MoveTarget>) -> Vec<MoveTarget> {
    candidates
        .into_iter()
        .filter(|&target| leaves_king_safe(board, piece, target))
        .collect()
}

fn leaves_king_safe(board: &Board, piece: &Piece, target: MoveTarget) -> bool {
    let mut speculative = board.clone();
    match speculative.make_move(piece, target) {
        Ok(_) => {
            let safe = !speculative.is_in_check(piece.owner);
            if !safe {
                trace!("discarding {:?} {} -> {:?}: king left in check", piece.kind, piece.position, target);
            }
            safe
        }
        Err(err) => {
            trace!("discarding {:?} {} -> {:?}: {err}", piece.kind, piece.position, target);
            false
        }
    }
}
