use std::sync::Arc;
use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::SpecialMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Node counts only, with the unannotated generator.
pub fn perft_legal(board: &Board, side: Color, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&FastLegalMoveGenerator, board, side, depth)
}

/// One worker thread per root move; each worker owns its boards.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mv, side.opposite(), depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessErrors::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

/// `next_side` is the side to move on `mv.board_after_move`.
fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    next_side: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.applied.captured.is_some() {
            counts.captures += 1;
        }
        match mv.applied.special {
            SpecialMove::EnPassant => counts.en_passant += 1,
            SpecialMove::Castle(_) => counts.castles += 1,
            SpecialMove::Promotion(_) => counts.promotions += 1,
            SpecialMove::Quiet | SpecialMove::DoublePawnPush => {}
        }
        if mv.annotations.gives_check {
            counts.checks += 1;
        }
        if mv.annotations.is_checkmate {
            counts.checkmates += 1;
        }

        return Ok(());
    }

    let moves = generator.generate_legal_moves(&mv.board_after_move, next_side)?;
    for child in moves {
        perft_recurse(
            generator,
            &child,
            next_side.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}
