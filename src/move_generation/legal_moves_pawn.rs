//! Pawn move generation.
//!
//! White pawns advance toward rank index 0, Black pawns toward rank index 7.
//! Targets are emitted in a fixed order: double step, single step, diagonal
//! captures, en passant. Any arrival on the final rank is expanded into the
//! four promotion targets.

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::move_descriptions::MoveTarget;
use crate::moves::pawn_moves::PAWN_CAPTURE_FILE_STEPS;

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<MoveTarget>) {
    let rank_step = pawn.owner.pawn_direction();
    let one_step = pawn.position.offset(0, rank_step);
    let two_step = pawn.position.offset(0, 2 * rank_step);

    if pawn.first_move && board.check_if_empty(one_step) && board.check_if_empty(two_step) {
        out.push(MoveTarget::Regular(two_step));
    }

    if board.check_if_empty(one_step) {
        push_arrival(pawn, one_step, out);
    }

    for file_step in PAWN_CAPTURE_FILE_STEPS {
        let target = pawn.position.offset(file_step, rank_step);
        if board.check_if_opponent(target, pawn.owner) {
            push_arrival(pawn, target, out);
        }
    }

    if let Some(victim) = board.en_passant_target() {
        let beside = victim.position.rank == pawn.position.rank
            && (victim.position.file - pawn.position.file).abs() == 1;
        if victim.owner != pawn.owner && beside {
            let target = victim.position.offset(0, rank_step);
            if board.check_if_empty(target) {
                out.push(MoveTarget::Regular(target));
            }
        }
    }
}

fn push_arrival(pawn: &Piece, target: Square, out: &mut Vec<MoveTarget>) {
    if target.rank == pawn.owner.promotion_rank() {
        out.extend(PROMOTION_KINDS.iter().map(|&kind| MoveTarget::Promotion {
            file: target.file,
            kind,
        }));
    } else {
        out.push(MoveTarget::Regular(target));
    }
}
