//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate. Board mutation,
//! game turn handling, FEN loading and square parsing all report through it
//! so callers can propagate with `?` and match on one enum.
//!
//! Usage guidelines:
//! - Turn and legality variants (`NotYourTurn`, `IllegalMove`) are expected
//!   outcomes of feeding user or engine input to a `Game`.
//! - Geometry variants (`MalformedPromotion`, `MalformedCastle`,
//!   `InvalidEnPassant`) mean a move description did not fit the board it
//!   was applied to; the board is left untouched when they are returned.
//! - `InvalidState` indicates a bug or a hand-built position that breaks a
//!   board invariant.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A piece of the side not on move was asked to move.
    #[error("it is {expected:?}'s turn, tried to move a {found:?} piece")]
    NotYourTurn { expected: Color, found: Color },

    /// The target is not among the piece's legal moves.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// No matching piece is resident at the given square.
    #[error("no matching piece on {0}")]
    PieceNotOnBoard(Square),

    /// A square outside the 8x8 board was used as a destination.
    #[error("square {0:?} is off the board")]
    OutOfBounds(Square),

    /// The destination holds a piece of the mover's own color.
    #[error("square {0} is occupied by a friendly piece")]
    BoardLocationOccupied(Square),

    /// A promotion tag did not describe a pawn reaching its final rank, or a
    /// pawn reached its final rank without one.
    #[error("malformed promotion: {0}")]
    MalformedPromotion(String),

    /// A two-file king jump without a castling partner.
    #[error("malformed castle: {0}")]
    MalformedCastle(String),

    /// An empty-diagonal pawn move with no capturable en-passant pawn.
    #[error("invalid en passant capture onto {0}")]
    InvalidEnPassant(Square),

    /// An algebraic square such as `e4` failed to parse.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A FEN record failed to parse.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A board invariant does not hold.
    #[error("invalid game state: {0}")]
    InvalidState(String),
}
