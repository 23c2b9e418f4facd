//! Board move execution.
//!
//! `Board::make_move` validates the move description against the board
//! first, so a rejected move never leaves a half-applied position. It then
//! lifts the mover from its slot and dispatches on the move shape: promotion,
//! double pawn push, en passant, castle, or a plain step/capture. The
//! en-passant target is cleared by every move except a double push, which
//! sets it to the pushed pawn.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{AppliedMove, MoveTarget, SpecialMove};

/// Move shape resolved during validation.
enum Plan {
    Step,
    DoublePawnPush,
    EnPassant { victim: Square },
    Castle { side: CastleSide, rook_from: Square },
    Promotion(PromotionKind),
}

impl Board {
    /// Executes `target` for the resident piece at `piece.position`.
    pub fn make_move(&mut self, piece: &Piece, target: MoveTarget) -> Result<AppliedMove, ChessErrors> {
        let mover = self.resident(piece)?;
        let to = target.destination(mover.owner);
        let plan = self.plan_move(&mover, target, to).inspect_err(|err| {
            debug!("rejected {:?} {} -> {:?}: {err}", mover.kind, mover.position, target);
        })?;

        self.remove_from_board(mover.position);
        self.en_passant_target = None;

        let mut moved = mover;
        moved.position = to;
        moved.first_move = false;

        let (captured, special) = match plan {
            Plan::Promotion(kind) => {
                let captured = self.remove_from_board(to);
                moved.kind = kind.piece_kind();
                (captured, SpecialMove::Promotion(kind))
            }
            Plan::DoublePawnPush => (None, SpecialMove::DoublePawnPush),
            Plan::EnPassant { victim } => (self.remove_from_board(victim), SpecialMove::EnPassant),
            Plan::Castle { side, rook_from } => {
                let mut rook = self
                    .remove_from_board(rook_from)
                    .ok_or_else(|| ChessErrors::InvalidState(format!("castling rook vanished from {rook_from}")))?;
                rook.position = to.offset(-side.step(), 0);
                rook.first_move = false;
                self.place_piece(rook)?;
                (None, SpecialMove::Castle(side))
            }
            Plan::Step => (self.remove_from_board(to), SpecialMove::Quiet),
        };

        self.place_piece(moved)?;
        if special == SpecialMove::DoublePawnPush {
            self.en_passant_target = Some(to);
        }

        Ok(AppliedMove {
            kind: mover.kind,
            from: mover.position,
            to,
            captured,
            special,
        })
    }

    fn resident(&self, piece: &Piece) -> Result<Piece, ChessErrors> {
        match self.get_piece_at_position(piece.position) {
            Some(found) if found.kind == piece.kind && found.owner == piece.owner => Ok(*found),
            _ => Err(ChessErrors::PieceNotOnBoard(piece.position)),
        }
    }

    /// Checks the move description against the current board without
    /// touching it.
    fn plan_move(&self, mover: &Piece, target: MoveTarget, to: Square) -> Result<Plan, ChessErrors> {
        if !to.in_bounds() {
            return Err(ChessErrors::OutOfBounds(to));
        }
        if to == mover.position {
            return Err(ChessErrors::IllegalMove(format!("{} does not move", mover.position)));
        }
        if self.get_piece_at_position(to).is_some_and(|occupant| occupant.owner == mover.owner) {
            return Err(ChessErrors::BoardLocationOccupied(to));
        }

        let from = mover.position;
        let file_delta = to.file - from.file;
        let rank_delta = to.rank - from.rank;

        match (mover.kind, target) {
            (PieceKind::Pawn, MoveTarget::Promotion { kind, .. }) => {
                if rank_delta != mover.owner.pawn_direction() || file_delta.abs() > 1 {
                    return Err(ChessErrors::MalformedPromotion(format!(
                        "pawn on {from} cannot promote on {to}"
                    )));
                }
                if file_delta == 0 && !self.check_if_empty(to) {
                    return Err(ChessErrors::MalformedPromotion(format!("{to} is blocked")));
                }
                if file_delta != 0 && !self.check_if_opponent(to, mover.owner) {
                    return Err(ChessErrors::MalformedPromotion(format!("nothing to capture on {to}")));
                }
                Ok(Plan::Promotion(kind))
            }
            (_, MoveTarget::Promotion { .. }) => Err(ChessErrors::MalformedPromotion(format!(
                "{:?} on {from} cannot promote",
                mover.kind
            ))),
            (PieceKind::Pawn, MoveTarget::Regular(_)) => {
                if to.rank == mover.owner.promotion_rank() {
                    return Err(ChessErrors::MalformedPromotion(format!(
                        "pawn reaching {to} needs a promotion kind"
                    )));
                }
                let direction = mover.owner.pawn_direction();
                let one_step = from.offset(0, direction);
                if file_delta == 0 && rank_delta == direction && self.check_if_empty(to) {
                    return Ok(Plan::Step);
                }
                if file_delta == 0
                    && rank_delta == 2 * direction
                    && self.check_if_empty(one_step)
                    && self.check_if_empty(to)
                {
                    return Ok(Plan::DoublePawnPush);
                }
                if file_delta.abs() == 1 && rank_delta == direction {
                    if self.check_if_opponent(to, mover.owner) {
                        return Ok(Plan::Step);
                    }
                    let victim = Square::new(to.file, from.rank);
                    return match self.en_passant_target() {
                        Some(pawn) if pawn.position == victim && pawn.owner != mover.owner => {
                            Ok(Plan::EnPassant { victim })
                        }
                        _ => Err(ChessErrors::InvalidEnPassant(to)),
                    };
                }
                Err(ChessErrors::IllegalMove(format!("pawn cannot move {from} -> {to}")))
            }
            (PieceKind::King, MoveTarget::Regular(_)) if rank_delta == 0 && file_delta.abs() == 2 => {
                let side = if file_delta > 0 {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let rook_from = from.offset(side.rook_distance(), 0);
                match self.get_piece_at_position(rook_from) {
                    Some(rook) if rook.kind == PieceKind::Rook && rook.owner == mover.owner => {}
                    _ => {
                        return Err(ChessErrors::MalformedCastle(format!(
                            "no {:?} rook on {rook_from} for king on {from}",
                            mover.owner
                        )))
                    }
                }
                let mut between = from.offset(side.step(), 0);
                while between != rook_from {
                    if !self.check_if_empty(between) {
                        return Err(ChessErrors::MalformedCastle(format!("{between} is not empty")));
                    }
                    between = between.offset(side.step(), 0);
                }
                Ok(Plan::Castle { side, rook_from })
            }
            (_, MoveTarget::Regular(_)) => Ok(Plan::Step),
        }
    }
}
