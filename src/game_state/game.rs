//! Turn-taking game state machine.
//!
//! `Game` owns the board, one `Player` per color, the side to move and the
//! no-progress (fifty-move) counter. Terminal states are queries over the
//! current position rather than stored transitions.

use log::info;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::NO_PROGRESS_HALF_MOVE_LIMIT;
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
use crate::moves::move_descriptions::{AppliedMove, ChessMove, MoveTarget};
use crate::utils::fen_parser::parse_fen;

/// Distinguishing token for one side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub white: Player,
    pub black: Player,
    pub current_turn: Color,
    /// Half-moves since the last pawn move or capture.
    pub no_progress_counter: u16,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty board with White to move. Call `new_game` for the standard
    /// starting layout.
    pub fn new() -> Self {
        Self::from_board(Board::new_empty(), Color::White)
    }

    pub fn from_board(board: Board, current_turn: Color) -> Self {
        Self {
            board,
            white: Player { color: Color::White },
            black: Player { color: Color::Black },
            current_turn,
            no_progress_counter: 0,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Resets to the standard starting layout with White to move.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.current_turn = Color::White;
        self.no_progress_counter = 0;
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_turn)
    }

    /// Legal moves of the side to move.
    pub fn get_all_legal_moves(&self) -> Vec<ChessMove> {
        self.board.get_all_legal_moves(self.current_turn)
    }

    /// Plays `target` for `piece` if it is that piece's turn and the target is
    /// legal, then hands the move to the other side.
    pub fn make_move(&mut self, piece: &Piece, target: MoveTarget) -> Result<AppliedMove, ChessErrors> {
        if piece.owner != self.current_turn {
            return Err(ChessErrors::NotYourTurn {
                expected: self.current_turn,
                found: piece.owner,
            });
        }

        let resident = *self
            .board
            .get_piece_at_position(piece.position)
            .filter(|found| found.owner == piece.owner && found.kind == piece.kind)
            .ok_or(ChessErrors::PieceNotOnBoard(piece.position))?;
        if !resident.legal_moves(&self.board, true).contains(&target) {
            return Err(ChessErrors::IllegalMove(
                ChessMove::new(resident, target).to_string(),
            ));
        }

        let applied = self.board.make_move(&resident, target)?;
        if applied.resets_no_progress() {
            self.no_progress_counter = 0;
        } else {
            self.no_progress_counter = self.no_progress_counter.saturating_add(1);
        }
        self.current_turn = self.current_turn.opposite();

        Ok(applied)
    }

    /// Convenience wrapper for a move taken from `get_all_legal_moves`.
    #[inline]
    pub fn apply(&mut self, chess_move: &ChessMove) -> Result<AppliedMove, ChessErrors> {
        self.make_move(&chess_move.piece, chess_move.target)
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.current_turn)
    }

    /// The winning player if the side to move is checkmated.
    pub fn checkmate(&self) -> Option<&Player> {
        if self.is_in_check() && self.get_all_legal_moves().is_empty() {
            Some(self.player(self.current_turn.opposite()))
        } else {
            None
        }
    }

    /// No legal moves without check, fifty-move rule, or insufficient
    /// material.
    pub fn stalemate(&self) -> bool {
        if self.no_progress_counter >= NO_PROGRESS_HALF_MOVE_LIMIT || self.insufficient_material() {
            return true;
        }
        !self.is_in_check() && self.get_all_legal_moves().is_empty()
    }

    /// Bare kings, or kings plus a single bishop or knight.
    pub fn insufficient_material(&self) -> bool {
        let mut kings = 0;
        let mut minors = 0;
        let mut others = 0;
        for piece in self.board.pieces() {
            match piece.kind {
                PieceKind::King => kings += 1,
                PieceKind::Bishop | PieceKind::Knight => minors += 1,
                _ => others += 1,
            }
        }
        kings == 2 && others == 0 && minors <= 1
    }

    pub fn status(&self) -> GameStatus {
        let legal_moves_exist = !self.get_all_legal_moves().is_empty();
        let status = if !legal_moves_exist && self.is_in_check() {
            GameStatus::Checkmate {
                winner: self.current_turn.opposite(),
            }
        } else if !legal_moves_exist
            || self.no_progress_counter >= NO_PROGRESS_HALF_MOVE_LIMIT
            || self.insufficient_material()
        {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        };

        if status != GameStatus::InProgress {
            info!(
                "game over after {} half-moves without progress: {status:?}",
                self.no_progress_counter
            );
        }
        status
    }
}
