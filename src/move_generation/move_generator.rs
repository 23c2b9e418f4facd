use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Board, Color};
use crate::moves::move_descriptions::{AppliedMove, ChessMove};

pub type MoveGenResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move together with the board it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub applied: AppliedMove,
    pub board_after_move: Board,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveGenResult<Vec<GeneratedMove>>;
}
